// Room editor: a line-driven front end for the editing core

use clap::Parser;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use room_editor::command::Command;
use room_editor::config::{Containment, EditorConfig, ObjectLimits, RoomConfig, ROOM_HALF_EXTENT};
use room_editor::render::{Frame, LogSink, RenderSink};
use room_editor::session::{Outcome, Session};

/// Reads editing commands from stdin, one per line.
#[derive(Debug, Parser)]
#[command(name = "room-editor", version)]
struct Args {
    /// Half-extent of the room in world units
    #[arg(long, default_value_t = ROOM_HALF_EXTENT)]
    half_extent: f32,

    /// Treat a box touching a wall as crossing it
    #[arg(long)]
    exclusive: bool,

    #[arg(long, default_value_t = 10)]
    max_primitives: usize,

    #[arg(long, default_value_t = 5)]
    max_models: usize,

    /// Viewport aspect ratio used for submitted frames
    #[arg(long, default_value_t = 16.0 / 9.0)]
    aspect: f32,
}

impl Args {
    fn config(&self) -> EditorConfig {
        EditorConfig {
            room: RoomConfig {
                half_extent: self.half_extent,
                containment: if self.exclusive {
                    Containment::Exclusive
                } else {
                    Containment::Inclusive
                },
            },
            limits: ObjectLimits {
                max_primitives: self.max_primitives,
                max_models: self.max_models,
            },
            ..EditorConfig::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let mut session = Session::new(args.config())?;
    let mut sink = LogSink::default();
    info!("Room half-extent {} ({:?})", args.half_extent, session.editor.planes().containment());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let result = line
            .parse::<Command>()
            .and_then(|command| session.execute(command));
        match result {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Placed(index)) => println!("placed {index}"),
            Ok(Outcome::Listing(labels)) => {
                for (index, label) in labels.iter().enumerate() {
                    println!("{index}: {label}");
                }
            }
            Ok(Outcome::Done) => println!("ok"),
            Err(err) => {
                error!("{line}: {err}");
                println!("error: {err}");
            }
        }

        sink.submit(&Frame::build(session.editor.scene(), &session.camera, args.aspect));
    }

    info!("Session ended after {} frames", sink.frames);
    Ok(())
}
