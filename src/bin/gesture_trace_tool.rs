use scale_text_view::api::{ScaleTextView, ScaleTextViewConfig, ScaleTextViewSnapshot};
use scale_text_view::host::MemoryViewHost;
use scale_text_view::interaction::{ScaleGestureListener, TouchEvent};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GestureTraceFile {
    trace_name: String,
    viewport: TraceViewport,
    #[serde(default)]
    config: ScaleTextViewConfig,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TraceViewport {
    width: i32,
    content_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TraceStep {
    /// Dispatched the way a toolkit would: intercept first, then the view.
    Touch { event: TouchEvent },
    Begin,
    Update { factor: f64 },
    End,
    Scroll { x: i32, y: i32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GestureCaptureFile {
    trace_name: String,
    steps: Vec<CapturedStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CapturedStep {
    index: usize,
    step: TraceStep,
    intercepted: Option<bool>,
    snapshot: ScaleTextViewSnapshot,
}

fn main() {
    let _ = scale_text_view::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace: GestureTraceFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let capture = replay_trace(trace)?;
    write_json(&args.output, &capture)
}

fn replay_trace(trace: GestureTraceFile) -> Result<GestureCaptureFile, String> {
    let host = MemoryViewHost::with_viewport(trace.viewport.width, trace.viewport.content_height);
    let mut view = ScaleTextView::with_host(host, trace.config)
        .map_err(|err| format!("invalid view config: {err}"))?;

    let mut steps = Vec::with_capacity(trace.steps.len());
    for (index, step) in trace.steps.into_iter().enumerate() {
        let intercepted = match &step {
            TraceStep::Touch { event } => {
                let decision = view.on_intercept_touch_event(event);
                if decision.intercepts() {
                    view.on_touch_event(event);
                }
                Some(decision.intercepts())
            }
            TraceStep::Begin => {
                view.on_gesture_begin();
                None
            }
            TraceStep::Update { factor } => {
                view.on_gesture_update(*factor);
                None
            }
            TraceStep::End => {
                view.on_gesture_end();
                None
            }
            TraceStep::Scroll { x, y } => {
                view.host_mut().set_scroll(*x, *y);
                None
            }
        };
        steps.push(CapturedStep {
            index,
            step,
            intercepted,
            snapshot: view.snapshot(),
        });
    }

    info!(
        trace = %trace.trace_name,
        steps = steps.len(),
        final_scale = view.current_scale(),
        "trace replayed"
    );
    Ok(GestureCaptureFile {
        trace_name: trace.trace_name,
        steps,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("replay") => {}
        _ => {
            return Err(
                "usage: gesture_trace_tool replay --input <trace.json> --output <capture.json>"
                    .to_owned(),
            );
        }
    }

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown flag `{other}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
    })
}
