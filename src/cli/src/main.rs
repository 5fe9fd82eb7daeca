use clap::{Parser, Subcommand};
use cube_core::{Colour, SIDES, Side, cube::Cube, operators};
use log::LevelFilter;
use owo_colors::OwoColorize;

/// Builds, turns, and scrambles 3x3x3 cube states in the terminal
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the solved cube
    Show,
    /// Turn one side of the solved cube and print the result
    Turn {
        /// The side to turn; one of U, F, R, B, L or D
        side: Side,
        /// How many clockwise quarter turns to apply (3 turns counter-clockwise)
        #[arg(short, long, default_value_t = 1)]
        turns: u32,
    },
    /// Apply random operators to the solved cube and print the result
    Scramble {
        /// How many random quarter turns to apply
        #[arg(short, long, default_value_t = 30)]
        length: usize,
        /// Seed the scramble to make it reproducible
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let cube = match cli.command {
        Commands::Show => Cube::solved(),
        Commands::Turn { side, turns } => Cube::solved().turned(side, turns),
        Commands::Scramble { length, seed } => match seed {
            Some(seed) => operators::scramble_with(
                &mut fastrand::Rng::with_seed(seed),
                &Cube::solved(),
                length,
            ),
            None => operators::scramble(&Cube::solved(), length),
        },
    };

    print_cube(&cube);

    Ok(())
}

fn print_cube(cube: &Cube) {
    for (side, grid) in SIDES.iter().zip(cube.facelet_grids()) {
        println!("{} side", side.name());

        for row in grid {
            let facelets = row.map(paint_facelet);
            println!("{}", facelets.join(" "));
        }

        println!();
    }

    if cube.is_solved() {
        println!("{}", "The cube is solved!".green());
    }
}

fn paint_facelet(colour: Colour) -> String {
    let letter = colour.letter().to_string();

    match colour {
        Colour::White => letter.white().to_string(),
        Colour::Green => letter.green().to_string(),
        Colour::Red => letter.red().to_string(),
        Colour::Blue => letter.blue().to_string(),
        Colour::Orange => letter.truecolor(255, 128, 0).to_string(),
        Colour::Yellow => letter.yellow().to_string(),
    }
}
