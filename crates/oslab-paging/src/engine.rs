//! Shared simulation loop for the history-scanning policies.
//!
//! Optimal, LRU, MRU, LFU, and MFU differ only in how they pick a victim
//! once every frame is full; the hit / empty-frame scaffolding is identical.
//! FIFO and Second-Chance carry extra per-run state (a pointer, reference
//! bits) and implement their loops directly.

use oslab_error::{Result, SimError};
use tracing::debug;

use crate::types::{finish, validate, PageRequest, PagingInput, PagingOutput};

/// Victim selection once all frames are occupied.
pub(crate) trait VictimPolicy {
    /// Pick the frame to overwrite.
    ///
    /// `past` holds the references before the current one, `future` the
    /// references after it; `frames` are the resident pages (all frames
    /// full). Must return a valid frame index.
    fn select_victim(&self, past: &[String], future: &[String], frames: &[String]) -> usize;
}

/// Run the shared loop with `policy` choosing victims.
pub(crate) fn simulate<P: VictimPolicy>(input: &PagingInput, policy: &P) -> Result<PagingOutput> {
    validate(input)?;
    let references = input.reference_string.clone();
    let mut frames: Vec<Option<String>> = vec![None; input.num_frames];
    let mut requests = Vec::with_capacity(references.len());

    for (position, reference) in references.iter().enumerate() {
        if frames
            .iter()
            .any(|f| f.as_deref() == Some(reference.as_str()))
        {
            requests.push(PageRequest::Hit {
                reference: reference.clone(),
                frames: frames.clone(),
                clock: None,
            });
            continue;
        }

        if let Some(empty) = frames.iter().position(Option::is_none) {
            frames[empty] = Some(reference.clone());
            requests.push(PageRequest::Fault {
                reference: reference.clone(),
                frames: frames.clone(),
                frame: empty,
                clock: None,
            });
            continue;
        }

        let resident: Vec<String> = frames.iter().flatten().cloned().collect();
        if resident.len() != frames.len() {
            return Err(SimError::internal(
                "frame set reported full but contains an empty frame",
            ));
        }
        let victim = policy.select_victim(
            &references[..position],
            &references[position + 1..],
            &resident,
        );
        if victim >= frames.len() {
            return Err(SimError::internal(format!(
                "victim frame {victim} out of range ({} frames)",
                frames.len()
            )));
        }
        let evicted_page = resident[victim].clone();
        debug!(victim, %evicted_page, "evicting resident page");
        frames[victim] = Some(reference.clone());
        requests.push(PageRequest::Eviction {
            reference: reference.clone(),
            frames: frames.clone(),
            frame: victim,
            evicted_page,
            clock: None,
        });
    }

    Ok(finish(requests, input.clone()))
}
