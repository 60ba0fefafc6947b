//! Brodot Demo
//!
//! Renders a set of showcase canvases to stdout, either as terminal text or
//! as JSON snapshots.

use std::io;
use std::process::ExitCode;

use brodot::{draw, Canvas, CanvasConfig, CanvasOptions, Color, Snapshot};
use serde::Serialize;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SCENES: [&str; 7] = [
    "pixels", "cell", "diagonal", "box", "inverted", "shapes", "colors",
];

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_file: Option<String> = None;
    let mut scene = String::from("all");
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            },
            "-s" | "--scene" => {
                i += 1;
                if i < args.len() {
                    scene = args[i].clone();
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            other => {
                eprintln!("Unknown argument '{}'", other);
                print_help();
                return ExitCode::FAILURE;
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match &config_file {
        Some(path) => match CanvasConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => CanvasConfig::default(),
    };

    let names: Vec<&str> = if scene == "all" {
        SCENES.to_vec()
    } else if let Some(&name) = SCENES.iter().find(|&&name| name == scene) {
        vec![name]
    } else {
        eprintln!("Unknown scene '{}'", scene);
        return ExitCode::FAILURE;
    };

    let rendered: Vec<Scene> = names
        .into_iter()
        .filter_map(|name| render_scene(name, &config))
        .collect();

    match output_format {
        OutputFormat::Text => print_text(&config, &rendered),
        OutputFormat::Json => {
            let output: Vec<SceneSnapshot> = rendered
                .iter()
                .map(|scene| SceneSnapshot {
                    scene: scene.name,
                    snapshot: Snapshot::from_canvas(&scene.canvas),
                })
                .collect();
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing snapshots: {}", e);
                    return ExitCode::FAILURE;
                },
            }
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

struct Scene {
    name: &'static str,
    title: &'static str,
    canvas: Canvas,
    note: Option<&'static str>,
}

#[derive(Serialize)]
struct SceneSnapshot {
    scene: &'static str,
    snapshot: Snapshot,
}

fn render_scene(name: &str, config: &CanvasConfig) -> Option<Scene> {
    let scene = match name {
        "pixels" => {
            let mut canvas = Canvas::new(4, 8);
            canvas.set(0.0, 0.0);
            canvas.set(3.0, 0.0);
            canvas.set(0.0, 7.0);
            canvas.set(3.0, 7.0);
            Scene {
                name: "pixels",
                title: "Individual pixels",
                canvas,
                note: None,
            }
        },
        "cell" => {
            let mut canvas = Canvas::new(2, 4);
            for y in 0..4 {
                for x in 0..2 {
                    canvas.set(x as f64, y as f64);
                }
            }
            Scene {
                name: "cell",
                title: "All 8 dots in a cell",
                canvas,
                note: Some(DOT_LAYOUT),
            }
        },
        "diagonal" => {
            let mut canvas = Canvas::new(20, 20);
            for i in 0..20 {
                canvas.set(i as f64, i as f64);
            }
            Scene {
                name: "diagonal",
                title: "Diagonal pattern",
                canvas,
                note: None,
            }
        },
        "box" => {
            let mut canvas = Canvas::new(16, 12);
            for x in 0..16 {
                canvas.set(x as f64, 0.0);
                canvas.set(x as f64, 11.0);
            }
            for y in 0..12 {
                canvas.set(0.0, y as f64);
                canvas.set(15.0, y as f64);
            }
            Scene {
                name: "box",
                title: "Box outline",
                canvas,
                note: None,
            }
        },
        "inverted" => {
            let mut canvas = Canvas::with_options(8, 8, CanvasOptions::new().with_inverted_y());
            for i in 0..8 {
                canvas.set(i as f64, i as f64);
            }
            Scene {
                name: "inverted",
                title: "Inverted Y-axis (mathematical coordinates)",
                canvas,
                note: Some("   (origin at bottom-left)"),
            }
        },
        "shapes" => {
            let mut canvas = config.build();
            draw_shapes(&mut canvas, None);
            Scene {
                name: "shapes",
                title: "Lines, circles and rectangles",
                canvas,
                note: None,
            }
        },
        "colors" => {
            let mut canvas = CanvasConfig {
                options: config.options.with_color(),
                ..*config
            }
            .build();
            draw_shapes(&mut canvas, Some(Color::Cyan));
            draw_palette(&mut canvas);
            Scene {
                name: "colors",
                title: "Cell colors",
                canvas,
                note: None,
            }
        },
        _ => return None,
    };
    Some(scene)
}

/// Draw one of each shape scaled to the canvas size.
///
/// With a color, the outline shapes are recolored afterwards by redrawing
/// their pixels with `set_color`.
fn draw_shapes(canvas: &mut Canvas, color: Option<Color>) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let r = (w.min(h) / 4.0).floor();

    draw::rectangle(canvas, 0.0, 0.0, w, h);
    draw::line(canvas, 0.0, 0.0, w - 1.0, h - 1.0);
    draw::line(canvas, 0.0, h - 1.0, w - 1.0, 0.0);
    draw::circle(canvas, w / 4.0, h / 2.0, r);
    draw::circle_filled(canvas, w * 3.0 / 4.0, h / 2.0, r / 2.0);
    draw::rectangle_filled(canvas, w / 2.0 - 2.0, h / 2.0 - 2.0, 4.0, 4.0);

    if let Some(color) = color {
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let (x, y) = (x as f64, y as f64);
                if canvas.get(x, y) {
                    canvas.set_color(x, y, color);
                }
            }
        }
    }
}

/// One filled cell per palette color along the top row
fn draw_palette(canvas: &mut Canvas) {
    for (col, color) in Color::ALL.iter().skip(1).enumerate() {
        let x = (col * 2) as f64;
        for y in 0..4 {
            canvas.set_color(x, y as f64, *color);
            canvas.set_color(x + 1.0, y as f64, *color);
        }
    }
}

fn print_text(config: &CanvasConfig, scenes: &[Scene]) {
    let header = config.build();
    println!("brodot v{} Demo", env!("CARGO_PKG_VERSION"));
    println!("==================");
    println!();
    println!(
        "Canvas: {}x{} pixels ({} cols x {} rows)",
        header.width(),
        header.height(),
        header.cols(),
        header.rows()
    );
    println!();

    for (index, scene) in scenes.iter().enumerate() {
        println!("{}. {}:", index + 1, scene.title);
        println!("{}", scene.canvas.frame());
        if let Some(note) = scene.note {
            println!();
            println!("{}", note);
        }
        println!();
    }
}

const DOT_LAYOUT: &str = "   Dot positions:    Bit values:
     0  3              0x01  0x08
     1  4              0x02  0x10
     2  5              0x04  0x20
     6  7              0x40  0x80";

fn print_help() {
    println!("Brodot Demo");
    println!();
    println!("Usage: brodot-demo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Canvas config for the shapes and colors scenes");
    println!("  -s, --scene <NAME>   Scene to render (default: all)");
    println!("  -j, --json           Output scenes as JSON snapshots");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Scenes: {}, all", SCENES.join(", "));
    println!();
    println!("Examples:");
    println!("  brodot-demo --scene shapes");
    println!("  echo '{{\"width\": 80, \"height\": 40}}' > canvas.json");
    println!("  brodot-demo -c canvas.json --json > snapshots.json");
}
