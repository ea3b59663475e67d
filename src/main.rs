//! `orthoglobe` probe: replays pointer drags on one globe and prints which
//! markers end up on the visible hemisphere, as JSON.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use orthoglobe::geo::{GeoPoint, RotationState};
use orthoglobe::globe::{load_markers, GlobeController, Marker};
use orthoglobe::input::InputEvent;
use orthoglobe::options::Options;
use orthoglobe::GlobeError;
use serde::Serialize;

/// Replay drag gestures on an orthographic globe.
#[derive(Debug, Parser)]
#[command(name = "orthoglobe", version, about)]
struct Cli {
    /// Options preset (TOML). Defaults are used when omitted.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Marker records (JSON array of longitude/latitude/magnitude/label).
    #[arg(long)]
    markers: Option<PathBuf>,

    /// Container width in pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Drag delta in pixels as `dx,dy`. Repeat for a multi-step gesture.
    #[arg(long = "drag", value_parser = parse_pair, allow_hyphen_values = true)]
    drags: Vec<(f64, f64)>,

    /// Pointer position `x,y` to hit-test after the drags.
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pointer: Option<(f64, f64)>,
}

#[derive(Serialize)]
struct VisibleMarker<'a> {
    #[serde(flatten)]
    marker: &'a Marker,
    x: f64,
    y: f64,
    radius: f64,
}

#[derive(Serialize)]
struct Report<'a> {
    rotation: RotationState,
    total_markers: usize,
    visible: Vec<VisibleMarker<'a>>,
    hit: Option<&'a Marker>,
    pointer_location: Option<GeoPoint>,
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `a,b`, got `{s}`"))?;
    let a: f64 = a.trim().parse().map_err(|e| format!("`{a}`: {e}"))?;
    let b: f64 = b.trim().parse().map_err(|e| format!("`{b}`: {e}"))?;
    Ok((a, b))
}

fn replay_drags(globe: &mut GlobeController, drags: &[(f64, f64)]) {
    if drags.is_empty() {
        return;
    }
    let centre = globe.projection().translate();
    let (mut x, mut y) = (centre.x, centre.y);
    let _ = globe.handle_event(InputEvent::PointerDown { x, y });
    for &(dx, dy) in drags {
        x += dx;
        y += dy;
        let _ = globe.handle_event(InputEvent::PointerMoved { x, y });
    }
    let _ = globe.handle_event(InputEvent::PointerUp);
    log::info!(
        "rotation after {} drag steps: ({}, {})",
        drags.len(),
        globe.rotation().lambda,
        globe.rotation().phi
    );
}

/// Writer failures stay I/O errors; anything else is an encoding failure.
fn report_error(e: serde_json::Error) -> GlobeError {
    if e.is_io() {
        GlobeError::Io(e.into())
    } else {
        GlobeError::Encode(e.to_string())
    }
}

fn run(cli: &Cli) -> Result<(), GlobeError> {
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut globe = GlobeController::new(&options);
    if let Some(width) = cli.width {
        globe.resize(width)?;
    }
    if let Some(path) = &cli.markers {
        globe.set_markers(load_markers(path)?);
    }

    replay_drags(&mut globe, &cli.drags);

    let visible = globe
        .visible_markers()
        .map(|(marker, screen)| VisibleMarker {
            marker,
            x: screen.x,
            y: screen.y,
            radius: globe.marker_radius(marker),
        })
        .collect();
    let (hit, pointer_location) = match cli.pointer {
        Some((x, y)) => (globe.hit_test(x, y), globe.pointer_location(x, y)),
        None => (None, None),
    };
    let report = Report {
        rotation: globe.rotation(),
        total_markers: globe.markers().len(),
        visible,
        hit,
        pointer_location,
    };

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)
        .map_err(report_error)?;
    writeln!(out)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        assert_eq!(parse_pair("3,-4.5"), Ok((3.0, -4.5)));
        assert_eq!(parse_pair(" -1 , 2 "), Ok((-1.0, 2.0)));
        assert!(parse_pair("3").is_err());
        assert!(parse_pair("a,1").is_err());
    }

    #[test]
    fn replayed_drags_accumulate() {
        let mut globe = GlobeController::default();
        replay_drags(&mut globe, &[(50.0, 0.0), (50.0, 0.0)]);
        assert!((globe.rotation().lambda - 70.0).abs() < 1e-9);
        assert!(!globe.is_dragging());
    }

    #[test]
    fn report_errors_keep_io_and_encoding_apart() {
        let mut keyed = std::collections::BTreeMap::new();
        let _ = keyed.insert((1, 2), 3);
        let e = serde_json::to_string(&keyed).unwrap_err();
        assert!(matches!(report_error(e), GlobeError::Encode(_)));

        struct ClosedPipe;
        impl Write for ClosedPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed pipe"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let e = serde_json::to_writer(ClosedPipe, &[1, 2]).unwrap_err();
        assert!(matches!(report_error(e), GlobeError::Io(_)));
    }

    #[test]
    fn cli_accepts_negative_drags() {
        let cli = Cli::try_parse_from([
            "orthoglobe",
            "--drag",
            "-10,5",
            "--drag",
            "3,-2",
            "--pointer",
            "400,400",
        ])
        .unwrap();
        assert_eq!(cli.drags, vec![(-10.0, 5.0), (3.0, -2.0)]);
        assert_eq!(cli.pointer, Some((400.0, 400.0)));
    }
}
