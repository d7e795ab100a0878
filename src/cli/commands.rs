//! Command implementations

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{error, info, warn};

use crate::cli::args::{CutArgs, DoctorArgs, InspectArgs};
use crate::config::Config;
use crate::engine::clipper::ExecutionOptions;
use crate::engine::runner::CommandRunner;
use crate::engine::{
    build_accurate, build_fast, Clipper, CommandSpec, CutOutcome, EncodeSettings,
};
use crate::error::VidcutError;
use crate::ffmpeg::{resolve_ffmpeg, version_banner};
use crate::planner::{resolve_range, RawTimeInputs};
use crate::probe::probe_duration;
use crate::utils::path::{dedupe_inputs, derive_output};
use crate::utils::time::{format_time, parse_time};

fn parse_time_flag(value: Option<&str>, flag: &str) -> Result<Option<f64>> {
    value
        .map(|text| parse_time(text).with_context(|| format!("Invalid value for {flag}")))
        .transpose()
}

/// Execute the cut command over every input.
pub fn cut(args: CutArgs) -> Result<()> {
    let config = Config::load()?;
    let ffmpeg = resolve_ffmpeg(args.ffmpeg.as_deref().or(config.ffmpeg.as_deref()))?;

    // The time flags are shared by every input, so a malformed value fails
    // the run before any file is touched.
    let raw = RawTimeInputs {
        start: parse_time_flag(args.start.as_deref(), "--from")?,
        end: parse_time_flag(args.end.as_deref(), "--to")?,
        duration: parse_time_flag(args.duration.as_deref(), "--duration")?,
        trim_start: parse_time_flag(args.trim_start.as_deref(), "--trim-start")?,
        trim_end: parse_time_flag(args.trim_end.as_deref(), "--trim-end")?,
    };

    let inputs = dedupe_inputs(&args.inputs);
    if args.output.is_some() && inputs.len() != 1 {
        bail!("--output is only allowed with a single input");
    }

    let suffix = args
        .suffix
        .clone()
        .or(config.suffix)
        .unwrap_or_else(|| "_cut".to_string());
    let encode = EncodeSettings {
        preset: args
            .preset
            .clone()
            .or(config.preset)
            .unwrap_or_else(|| "veryfast".to_string()),
        crf: args.crf.or(config.crf).unwrap_or(18),
    };
    let options = ExecutionOptions {
        force_accurate: args.accurate,
        dry_run: args.dry_run,
    };

    let clipper = Clipper::new();
    let mut failed = 0usize;

    for input in &inputs {
        let output = args
            .output
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| derive_output(input, &suffix));

        let outcome = cut_single_input(
            &clipper,
            &ffmpeg,
            input,
            &output,
            &raw,
            &encode,
            args.overwrite,
            options,
        );

        match outcome {
            CutOutcome::Succeeded { via } => {
                info!("OK ({via}): {} -> {}", input.display(), output.display());
            }
            CutOutcome::Skipped { reason } => {
                warn!("skip ({reason}): {}", input.display());
            }
            CutOutcome::Failed { error } => {
                error!("{}: {error}", input.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} input(s) failed", inputs.len());
    }
    Ok(())
}

/// Process one input file end to end: resolve the range (probing lazily),
/// synthesize both commands, and run the fallback strategy. Failures are
/// captured in the outcome so the batch loop can continue.
#[allow(clippy::too_many_arguments)]
pub fn cut_single_input<R: CommandRunner>(
    clipper: &Clipper<R>,
    ffmpeg: &Path,
    input: &Path,
    output: &Path,
    raw: &RawTimeInputs,
    encode: &EncodeSettings,
    overwrite: bool,
    options: ExecutionOptions,
) -> CutOutcome {
    if !input.is_file() {
        return CutOutcome::Skipped {
            reason: "not found".to_string(),
        };
    }

    let range = match resolve_range(raw, input, || probe_duration(ffmpeg, input)) {
        Ok(range) => range,
        Err(error) => return CutOutcome::Failed { error },
    };

    let spec = CommandSpec {
        ffmpeg,
        input,
        output,
        start: (range.start > 0.0).then_some(range.start),
        duration: range.duration,
        overwrite,
        encode,
    };
    let fast = build_fast(&spec);
    let accurate = build_accurate(&spec);

    clipper.execute(&fast, &accurate, options)
}

/// Execute the inspect command.
pub fn inspect(args: InspectArgs) -> Result<()> {
    let config = Config::load()?;
    let ffmpeg = resolve_ffmpeg(args.ffmpeg.as_deref().or(config.ffmpeg.as_deref()))?;

    let input = Path::new(&args.input);
    if !input.is_file() {
        return Err(VidcutError::InputNotFound {
            path: args.input.clone(),
        }
        .into());
    }

    let duration = probe_duration(&ffmpeg, input).ok_or_else(|| {
        VidcutError::ProbeUnavailable {
            path: args.input.clone(),
        }
    })?;

    if args.json {
        let report = serde_json::json!({
            "input": args.input,
            "duration": format_time(duration),
            "duration_seconds": duration,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {} ({duration:.3}s)", args.input, format_time(duration));
    }
    Ok(())
}

/// Execute the doctor command.
pub fn doctor(args: DoctorArgs) -> Result<()> {
    let config = Config::load()?;
    let ffmpeg = resolve_ffmpeg(args.ffmpeg.as_deref().or(config.ffmpeg.as_deref()))?;
    let banner = version_banner(&ffmpeg).context("Cannot run ffmpeg")?;

    println!("ffmpeg: {}", ffmpeg.display());
    println!("{banner}");
    Ok(())
}
