//! Command-line dungeon generator.
//!
//! Generates one dungeon and prints it as ASCII (or JSON with `--json`).

use std::process::ExitCode;

use clap::Parser;

use dg_core::{Cell, Dungeon, GenConfig, GenRng, RoomDungeonGenerator, WalkConfig};

/// Generate a room-based dungeon and print it.
#[derive(Parser, Debug)]
#[command(name = "dg")]
#[command(author, version, about = "Room-based dungeon generator", long_about = None)]
struct Args {
    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Region width in cells
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Region height in cells
    #[arg(long, default_value_t = 40)]
    height: i32,

    /// Minimum room width
    #[arg(long, default_value_t = 4)]
    min_room_width: i32,

    /// Minimum room height
    #[arg(long, default_value_t = 4)]
    min_room_height: i32,

    /// Inward clip offset for room floor (0-10)
    #[arg(long, default_value_t = 1)]
    offset: i32,

    /// Random-walk iterations per room
    #[arg(long, default_value_t = 15)]
    walk_iterations: u32,

    /// Steps per random-walk iteration
    #[arg(long, default_value_t = 20)]
    walk_length: u32,

    /// Restart each walk iteration from the original room center
    #[arg(long)]
    walk_from_center: bool,

    /// Emit the dungeon as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => GenRng::new(seed),
        None => GenRng::from_entropy(),
    };

    let config = GenConfig {
        width: args.width,
        height: args.height,
        min_room_width: args.min_room_width,
        min_room_height: args.min_room_height,
        offset: args.offset,
        walk: WalkConfig {
            iterations: args.walk_iterations,
            walk_length: args.walk_length,
            start_randomly_each_iteration: !args.walk_from_center,
        },
    };

    let seed = rng.seed();
    let dungeon = match RoomDungeonGenerator::new(config).generate(&mut rng) {
        Ok(dungeon) => dungeon,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&dungeon) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_ascii(&dungeon));
        println!("seed: {seed}");
    }

    ExitCode::SUCCESS
}

/// Draw the dungeon with `#` walls, `.` floor, `,` spawn-safe floor and
/// `@` at the player start. y grows upward, so rows print top-down.
fn render_ascii(dungeon: &Dungeon) -> String {
    let cells: Vec<Cell> = dungeon.floor.iter().chain(dungeon.walls.iter()).copied().collect();
    if cells.is_empty() {
        return String::new();
    }

    let x_min = cells.iter().map(|c| c.x).min().unwrap_or(0);
    let x_max = cells.iter().map(|c| c.x).max().unwrap_or(0);
    let y_min = cells.iter().map(|c| c.y).min().unwrap_or(0);
    let y_max = cells.iter().map(|c| c.y).max().unwrap_or(0);

    let placeable: dg_core::FloorSet = dungeon
        .placeable
        .values()
        .flat_map(|cells| cells.iter().copied())
        .collect();

    let width = (x_max - x_min + 1) as usize;
    let mut out = String::with_capacity((width + 1) * (y_max - y_min + 1) as usize);

    for y in (y_min..=y_max).rev() {
        for x in x_min..=x_max {
            let cell = Cell::new(x, y);
            let glyph = if cell == dungeon.player_start {
                '@'
            } else if placeable.contains(&cell) {
                ','
            } else if dungeon.floor.contains(&cell) {
                '.'
            } else if dungeon.walls.contains(&cell) {
                '#'
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}
