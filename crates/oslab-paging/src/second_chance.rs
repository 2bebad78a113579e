//! Second-Chance (clock) page replacement.

use oslab_error::Result;
use tracing::debug;

use crate::types::{finish, validate, ClockState, PageRequest, PagingInput, PagingOutput};

/// Clock algorithm over per-frame reference bits.
///
/// Hits set the referenced frame's bit and leave the hand alone. On a
/// fault the hand sweeps forward, clearing set bits, until it lands on a
/// frame with a clear bit; that frame receives the page (evicting its
/// occupant if any), gets its bit set, and the hand advances one slot.
/// Every record carries the bits and hand position after the step.
pub fn second_chance(input: &PagingInput) -> Result<PagingOutput> {
    validate(input)?;
    let mut frames: Vec<Option<String>> = vec![None; input.num_frames];
    let mut reference_bits = vec![false; input.num_frames];
    let mut hand = 0usize;
    let mut requests = Vec::with_capacity(input.reference_string.len());

    for reference in &input.reference_string {
        if let Some(resident) = frames
            .iter()
            .position(|f| f.as_deref() == Some(reference.as_str()))
        {
            reference_bits[resident] = true;
            requests.push(PageRequest::Hit {
                reference: reference.clone(),
                frames: frames.clone(),
                clock: Some(ClockState {
                    reference_bits: reference_bits.clone(),
                    hand,
                }),
            });
            continue;
        }

        // Sweep past frames with a set bit, giving each its second chance.
        while reference_bits[hand] {
            reference_bits[hand] = false;
            hand = (hand + 1) % input.num_frames;
        }

        let evicted = frames[hand].replace(reference.clone());
        reference_bits[hand] = true;
        let frame = hand;
        hand = (hand + 1) % input.num_frames;
        debug!(frame, ?evicted, "clock hand placed page");

        let clock = Some(ClockState {
            reference_bits: reference_bits.clone(),
            hand,
        });
        requests.push(match evicted {
            Some(evicted_page) => PageRequest::Eviction {
                reference: reference.clone(),
                frames: frames.clone(),
                frame,
                evicted_page,
                clock,
            },
            None => PageRequest::Fault {
                reference: reference.clone(),
                frames: frames.clone(),
                frame,
                clock,
            },
        });
    }

    Ok(finish(requests, input.clone()))
}
