//! Command-line front end for the oslab simulators.
//!
//! One subcommand per algorithm family; inputs arrive as the same
//! separator-delimited strings the form UI uses, outputs print as either a
//! human-readable derivation or `--json`.

use std::ffi::OsString;
use std::io::{self, Write};

use oslab::{
    bankers_request, calculate_ufs, detect_deadlock, safety, solve_vmem_mapping, DiskAlgorithm,
    DiskInput, MemorySize, PagingAlgorithm, PagingInput, SeekAction, Separator, UfsInput,
    VmemInput,
};
use oslab_error::{Result, SimError};
use oslab_types::refstring::{parse_cylinders, parse_pages};
use oslab_types::Vector;

const EXIT_USAGE: i32 = 64;

const USAGE: &str = "\
usage: oslab <command> [options]

commands:
  disk     disk-head scheduling (FIFO, SSTF, SCAN, C-SCAN, LOOK, C-LOOK)
  paging   page replacement (FIFO, Optimal, LRU, MRU, LFU, MFU, Second-Chance)
  banker   resource allocation (safety | request | detect)
  ufs      UFS max-file-size and block accounting
  vmem     virtual-memory address bits and page-table sizing

common options:
  --json         print the full output record as JSON
  --separator S  reference-string separator: comma | semicolon | whitespace

disk:    --algorithm ID --references STR --cylinders N --start N
paging:  --algorithm ID --references STR --frames N [--frames-end N]
banker safety:  --available V --holding M --max M
banker request: --available V --holding M --max M --process N --request V
banker detect:  --available V --holding M --requests M
ufs:     --direct N --single N --double N --triple N
         --block-size SIZE --block-number-size N
vmem:    --virtual-size SIZE --frames N --frame-size SIZE

vectors are whitespace-separated numbers; matrices use ';' between rows;
sizes are written like '4 KB'.";

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let code = run(std::env::args_os().skip(1), &mut stdout, &mut stderr);
    if code != 0 {
        std::process::exit(code);
    }
}

fn run<I, W, E>(args: I, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let args: Vec<String> = match args
        .into_iter()
        .map(|a| a.into_string())
        .collect::<std::result::Result<_, _>>()
    {
        Ok(args) => args,
        Err(_) => {
            let _ = writeln!(err, "oslab: arguments must be valid UTF-8");
            return EXIT_USAGE;
        }
    };

    let Some((command, rest)) = args.split_first() else {
        let _ = writeln!(err, "{USAGE}");
        return EXIT_USAGE;
    };

    if command == "--help" || command == "-h" || command == "help" {
        let _ = writeln!(out, "{USAGE}");
        return 0;
    }

    let parsed = match Options::parse(rest) {
        Ok(parsed) => parsed,
        Err(message) => {
            let _ = writeln!(err, "oslab: {message}");
            return EXIT_USAGE;
        }
    };

    let outcome = match command.as_str() {
        "disk" => run_disk(&parsed, out),
        "paging" => run_paging(&parsed, out),
        "banker" => run_banker(&parsed, out),
        "ufs" => run_ufs(&parsed, out),
        "vmem" => run_vmem(&parsed, out),
        other => {
            let _ = writeln!(err, "oslab: unknown command: {other}\n\n{USAGE}");
            return EXIT_USAGE;
        }
    };

    match outcome {
        Ok(()) => 0,
        Err(RunError::Usage(message)) => {
            let _ = writeln!(err, "oslab: {message}");
            EXIT_USAGE
        }
        Err(RunError::Sim(error)) => {
            let _ = writeln!(err, "oslab: {error}");
            error.exit_code()
        }
        Err(RunError::Io(error)) => {
            let _ = writeln!(err, "oslab: {error}");
            74
        }
    }
}

enum RunError {
    Usage(String),
    Sim(SimError),
    Io(io::Error),
}

impl From<SimError> for RunError {
    fn from(error: SimError) -> Self {
        Self::Sim(error)
    }
}

impl From<io::Error> for RunError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

type RunResult = std::result::Result<(), RunError>;

/// Parsed `--flag value` options plus positional words (used by `banker`).
struct Options {
    positional: Vec<String>,
    flags: Vec<(String, String)>,
    json: bool,
}

impl Options {
    fn parse(args: &[String]) -> std::result::Result<Self, String> {
        let mut positional = Vec::new();
        let mut flags = Vec::new();
        let mut json = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--json" {
                json = true;
            } else if let Some(name) = arg.strip_prefix("--") {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("missing value for --{name}"))?;
                flags.push((name.to_owned(), value.clone()));
            } else {
                positional.push(arg.clone());
            }
        }
        Ok(Self {
            positional,
            flags,
            json,
        })
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.flags
            .iter()
            .rev()
            .find(|(flag, _)| flag == name)
            .map(|(_, value)| value.as_str())
    }

    fn require(&self, name: &str) -> std::result::Result<&str, RunError> {
        self.get(name)
            .ok_or_else(|| RunError::Usage(format!("missing required option --{name}")))
    }

    fn require_number<T: std::str::FromStr>(&self, name: &str) -> std::result::Result<T, RunError> {
        let raw = self.require(name)?;
        raw.parse()
            .map_err(|_| RunError::Usage(format!("invalid number for --{name}: {raw}")))
    }

    fn separator(&self) -> std::result::Result<Separator, RunError> {
        match self.get("separator") {
            Some(id) => Ok(id.parse::<Separator>()?),
            None => Ok(Separator::Comma),
        }
    }
}

/// Parse a whitespace-separated vector of numbers.
fn parse_vector(raw: &str) -> Result<Vector> {
    raw.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| SimError::InvalidToken {
                token: token.to_owned(),
            })
        })
        .collect()
}

/// Parse a matrix: rows separated by ';', cells by whitespace.
fn parse_matrix(raw: &str) -> Result<Vec<Vector>> {
    raw.split(';').map(parse_vector).collect()
}

fn run_disk<W: Write>(options: &Options, out: &mut W) -> RunResult {
    let algorithm: DiskAlgorithm = options.require("algorithm")?.parse()?;
    let separator = options.separator()?;
    let reference_string = parse_cylinders(options.require("references")?, separator)?;
    let input = DiskInput {
        reference_string,
        num_cylinders: options.require_number("cylinders")?,
        starting_cylinder: options.require_number("start")?,
    };

    let output = algorithm.run(&input)?;
    if options.json {
        serde_json::to_writer_pretty(&mut *out, &output).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", algorithm.label())?;
    writeln!(out, "starting cylinder: {}", output.input.starting_cylinder)?;
    for status in &output.head_statuses {
        let action = match status.action {
            SeekAction::Seek => "seek",
            SeekAction::Jump => "jump",
        };
        writeln!(out, "  {action} -> {}", status.cylinder)?;
    }
    writeln!(out, "seek operations: {}", output.num_seek_operations)?;
    writeln!(out, "cylinders traversed (seeks): {}", output.seek_distance)?;
    writeln!(
        out,
        "cylinders traversed (with jumps): {}",
        output.total_distance
    )?;
    Ok(())
}

fn run_paging<W: Write>(options: &Options, out: &mut W) -> RunResult {
    let algorithm: PagingAlgorithm = options.require("algorithm")?.parse()?;
    let separator = options.separator()?;
    let reference_string = parse_pages(options.require("references")?, separator);
    let frames: usize = options.require_number("frames")?;

    let outputs = match options.get("frames-end") {
        Some(_) => {
            let end: usize = options.require_number("frames-end")?;
            oslab::run_for_frame_range(algorithm, &reference_string, frames, end)?
        }
        None => vec![algorithm.run(&PagingInput {
            reference_string,
            num_frames: frames,
        })?],
    };

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &outputs).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    for output in &outputs {
        writeln!(
            out,
            "{} with {} frames",
            algorithm.label(),
            output.input.num_frames
        )?;
        for request in &output.requests {
            let frames_text: Vec<&str> = request
                .frames()
                .iter()
                .map(|f| f.as_deref().unwrap_or("-"))
                .collect();
            let note = match request {
                oslab::PageRequest::Hit { .. } => "hit".to_owned(),
                oslab::PageRequest::Fault { frame, .. } => format!("fault, frame {frame}"),
                oslab::PageRequest::Eviction {
                    frame,
                    evicted_page,
                    ..
                } => format!("fault, frame {frame}, evicted {evicted_page}"),
            };
            writeln!(
                out,
                "  {:>4} | [{}] {note}",
                request.reference(),
                frames_text.join(" ")
            )?;
        }
        writeln!(
            out,
            "faults: {}, hits: {}",
            output.num_faults, output.num_hits
        )?;
    }
    Ok(())
}

fn run_banker<W: Write>(options: &Options, out: &mut W) -> RunResult {
    let Some(operation) = options.positional.first() else {
        return Err(RunError::Usage(
            "banker needs an operation: safety | request | detect".to_owned(),
        ));
    };

    let available = parse_vector(options.require("available")?)?;
    let holding = parse_matrix(options.require("holding")?)?;

    match operation.as_str() {
        "safety" => {
            let max = parse_matrix(options.require("max")?)?;
            let outcome = safety(&available, &holding, &max)?;
            if options.json {
                serde_json::to_writer_pretty(&mut *out, &outcome).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", outcome.trace)?;
            }
        }
        "request" => {
            let max = parse_matrix(options.require("max")?)?;
            let process: usize = options.require_number("process")?;
            let request = parse_vector(options.require("request")?)?;
            let outcome = bankers_request(&available, &holding, &max, process, &request)?;
            if options.json {
                serde_json::to_writer_pretty(&mut *out, &outcome).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", outcome.trace)?;
            }
        }
        "detect" => {
            let requests = parse_matrix(options.require("requests")?)?;
            let outcome = detect_deadlock(&available, &holding, &requests)?;
            if options.json {
                serde_json::to_writer_pretty(&mut *out, &outcome).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", outcome.trace)?;
            }
        }
        other => {
            return Err(RunError::Usage(format!(
                "unknown banker operation: {other}"
            )));
        }
    }
    Ok(())
}

fn run_ufs<W: Write>(options: &Options, out: &mut W) -> RunResult {
    let input = UfsInput {
        num_direct_pointers: options.require_number("direct")?,
        num_single_indirect_pointers: options.require_number("single")?,
        num_double_indirect_pointers: options.require_number("double")?,
        num_triple_indirect_pointers: options.require_number("triple")?,
        block_size: MemorySize::parse(options.require("block-size")?)?,
        block_number_size_bytes: options.require_number("block-number-size")?,
    };

    let output = calculate_ufs(&input)?;
    if options.json {
        serde_json::to_writer_pretty(&mut *out, &output).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "max file size: {}", output.max_file_size)?;
    writeln!(
        out,
        "data blocks for max file: {}",
        oslab_types::decimal::format_decimal(&output.data_blocks_for_max_file)
    )?;
    writeln!(
        out,
        "all blocks for max file: {}",
        oslab_types::decimal::format_decimal(&output.total_blocks_for_max_file)
    )?;
    Ok(())
}

fn run_vmem<W: Write>(options: &Options, out: &mut W) -> RunResult {
    let input = VmemInput {
        virtual_memory_size: MemorySize::parse(options.require("virtual-size")?)?,
        num_physical_frames: options.require_number("frames")?,
        frame_size: MemorySize::parse(options.require("frame-size")?)?,
    };

    let output = solve_vmem_mapping(&input)?;
    if options.json {
        serde_json::to_writer_pretty(&mut *out, &output).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "virtual pages: {}",
        oslab_types::decimal::format_decimal(&output.num_virtual_pages)
    )?;
    writeln!(out, "page number bits: {}", output.page_number_bits)?;
    writeln!(out, "frame number bits: {}", output.frame_number_bits)?;
    writeln!(out, "offset bits: {}", output.offset_bits)?;
    writeln!(
        out,
        "physical address bits: {}",
        output.physical_address_bits
    )?;
    writeln!(
        out,
        "page table: {} rows x {} bits = {}",
        oslab_types::decimal::format_decimal(&output.page_table.num_rows),
        output.page_table.row_size_bits,
        output.page_table.size
    )?;
    writeln!(
        out,
        "inverted page table: {} rows x {} bits = {}",
        oslab_types::decimal::format_decimal(&output.inverted_page_table.num_rows),
        output.inverted_page_table.row_size_bits,
        output.inverted_page_table.size
    )?;
    Ok(())
}
