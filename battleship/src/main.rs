// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::HashMap,
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{value_t, App, Arg};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::{Captures, Regex};

use broadside::{
    config::DEFAULT_AMMO,
    game::{GameEvent, RotateContext, Volley},
    weapons::Highlight,
    CellState, Coordinate, Game, GameConfig, Orientation, Phase, ShipKind, Side, Weapon,
};

mod logging;

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship against the computer, with special weapons.")
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed the computer's random choices for a repeatable game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("torpedoes")
                .short("t")
                .long("torpedoes")
                .value_name("COUNT")
                .help("number of torpedoes each side starts with")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("bombs")
                .short("b")
                .long("bombs")
                .value_name("COUNT")
                .help("number of cluster bombs each side starts with")
                .takes_value(true),
        )
        .get_matches();

    logging::init();

    let rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    };
    let torpedoes = if matches.is_present("torpedoes") {
        value_t!(matches, "torpedoes", u32).unwrap_or_else(|e| e.exit())
    } else {
        DEFAULT_AMMO
    };
    let bombs = if matches.is_present("bombs") {
        value_t!(matches, "bombs", u32).unwrap_or_else(|e| e.exit())
    } else {
        DEFAULT_AMMO
    };
    let config = GameConfig::default()
        .with_torpedo_ammo(torpedoes)
        .with_cluster_bomb_ammo(bombs);

    let mut game = match Game::new(config, rng) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    println!("Place your ships. Type help or ? for commands.");
    while game.winner().is_none() {
        println!();
        show_status(&game);
        let cmd = input.read_input_lower(">", parse_command)?;
        run_command(&mut game, cmd);
        report_events(&mut game);
    }
    println!();
    println!("Your board:");
    show_board(&game, Side::Player, &[]);
    println!();
    println!("Computer's board:");
    show_board(&game, Side::Ai, &[]);
    Ok(())
}

/// A parsed line of input.
enum Command {
    Place(ShipKind, Coordinate, Option<Orientation>),
    PlaceSelected(Coordinate),
    Select(ShipKind),
    Show(ShipKind),
    Rotate,
    Weapon(Weapon),
    Fire(Coordinate),
    Preview(Coordinate),
    Board,
    Help,
    Quit,
}

/// Pattern for a `row,col` or `row col` pair.
const COORD: &str = r"(?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)";

fn command_regex(prefix: &str) -> Regex {
    Regex::new(&format!(r"^{}\s+(?:(?:at|on)\s+)?{}$", prefix, COORD)).unwrap()
}

static PLACE_SELECTED: Lazy<Regex> = Lazy::new(|| command_regex("(?:place|put)"));
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:place|put)\s+(?P<ship>[a-z]+)\s+(?:(?:at|on)\s+)?{}(?:\s+(?P<deg>[0-9]+))?$",
        COORD
    ))
    .unwrap()
});
static SELECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:select|pick)\s+(?P<ship>[a-z]+)$").unwrap());
static SHOW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^show\s+(?P<ship>[a-z]+)$").unwrap());
static WEAPON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:weapon|use)\s+(?P<weapon>[a-z]+)$").unwrap());
static FIRE: Lazy<Regex> = Lazy::new(|| command_regex("(?:fire|shoot)"));
static PREVIEW: Lazy<Regex> = Lazy::new(|| command_regex("(?:preview|aim)"));

/// Parse one line of lowercased input, printing a message and returning `None` if it
/// isn't a valid command.
fn parse_command(input: &str) -> Option<Command> {
    match input {
        "?" | "help" | "h" => return Some(Command::Help),
        "quit" | "exit" | "q" => return Some(Command::Quit),
        "rotate" | "r" => return Some(Command::Rotate),
        "board" | "b" => return Some(Command::Board),
        _ => {}
    }
    if let Some(captures) = PLACE_SELECTED.captures(input) {
        Some(Command::PlaceSelected(parse_coord(&captures)?))
    } else if let Some(captures) = PLACE.captures(input) {
        let ship = parse_ship(&captures["ship"])?;
        let coord = parse_coord(&captures)?;
        let orientation = match captures.name("deg") {
            None => None,
            Some(deg) => match deg.as_str().parse().ok().and_then(Orientation::from_degrees) {
                Some(orientation) => Some(orientation),
                None => {
                    println!("invalid rotation {}, choose 0, 90, 180, or 270", deg.as_str());
                    return None;
                }
            },
        };
        Some(Command::Place(ship, coord, orientation))
    } else if let Some(captures) = SELECT.captures(input) {
        Some(Command::Select(parse_ship(&captures["ship"])?))
    } else if let Some(captures) = SHOW.captures(input) {
        Some(Command::Show(parse_ship(&captures["ship"])?))
    } else if let Some(captures) = WEAPON.captures(input) {
        Some(Command::Weapon(parse_weapon(&captures["weapon"])?))
    } else if let Some(captures) = FIRE.captures(input) {
        Some(Command::Fire(parse_coord(&captures)?))
    } else if let Some(captures) = PREVIEW.captures(input) {
        Some(Command::Preview(parse_coord(&captures)?))
    } else {
        println!("Invalid command \"{}\". Use '?' for help", input);
        None
    }
}

fn parse_coord(captures: &Captures) -> Option<Coordinate> {
    match (captures["row"].parse(), captures["col"].parse()) {
        (Ok(row), Ok(col)) => Some(Coordinate::new(row, col)),
        _ => {
            println!("invalid cell {},{}", &captures["row"], &captures["col"]);
            None
        }
    }
}

fn parse_ship(name: &str) -> Option<ShipKind> {
    Some(match name {
        "pt" | "patrol" => ShipKind::Patrol,
        "ss" | "sub" | "submarine" => ShipKind::Submarine,
        "dd" | "destroyer" => ShipKind::Destroyer,
        "bb" | "battleship" => ShipKind::Battleship,
        "cv" | "carrier" => ShipKind::Carrier,
        other => {
            println!(
                "invalid ship: {}, choose \"patrol\", \"submarine\", \"destroyer\", \"battleship\", or \"carrier\"",
                other
            );
            return None;
        }
    })
}

fn parse_weapon(name: &str) -> Option<Weapon> {
    Some(match name {
        "standard" | "artillery" => Weapon::Standard,
        "scanner" | "sonar" => Weapon::Scanner,
        "torpedo" | "torp" => Weapon::Torpedo,
        "rail" | "railgun" => Weapon::RailGun,
        "cluster" | "bomb" => Weapon::ClusterBomb,
        other => {
            println!(
                "invalid weapon: {}, choose \"standard\", \"scanner\", \"torpedo\", \"rail\", or \"cluster\"",
                other
            );
            return None;
        }
    })
}

fn run_command(game: &mut Game<StdRng>, cmd: Command) {
    match cmd {
        Command::Place(kind, center, orientation) => {
            let orientation = orientation.unwrap_or_else(|| game.ship_orientation());
            match game.place_ship(kind, center, orientation) {
                Ok(()) => show_board(game, Side::Player, &[]),
                Err(err) => println!("{}", err),
            }
        }
        Command::PlaceSelected(center) => match game.place_selected(center) {
            Ok(()) => show_board(game, Side::Player, &[]),
            Err(err) => println!("{}", err),
        },
        Command::Select(kind) => match game.select_ship(kind) {
            Ok(()) => println!("Selected {}.", kind),
            Err(reason) => println!("cannot select {}: {}", kind, reason),
        },
        Command::Show(kind) => match game.fleet(Side::Player).ships().get(kind) {
            None => println!("Your {} hasn't been placed.", kind),
            Some(&placement) => {
                println!(
                    "Your {} is centered on {}, rotated {} degrees.",
                    kind,
                    placement.center(),
                    placement.orientation().degrees()
                );
                show_board(game, Side::Player, &game.ship_preview(Side::Player, kind));
            }
        },
        Command::Rotate => {
            let context = match game.phase() {
                Phase::Setup => RotateContext::ShipSetup,
                _ => RotateContext::Weapon,
            };
            let orientation = game.rotate(context);
            println!("Rotation is now {} degrees.", orientation.degrees());
            if context == RotateContext::Weapon {
                show_pattern(game.selected_weapon(), orientation);
            }
        }
        Command::Weapon(weapon) => {
            game.select_weapon(weapon);
            println!("{} ready.", weapon);
            if weapon.is_rotatable() {
                show_pattern(weapon, game.weapon_orientation());
            }
        }
        Command::Fire(aim) => match game.play_selected(aim) {
            Ok(round) => {
                report_volley(&round.player);
                if let Some(ai) = &round.ai {
                    report_volley(ai);
                }
                println!();
                show_board(game, Side::Ai, &[]);
            }
            Err(err) if err.is_fatal() => {
                eprintln!("fatal: {}", err);
                process::exit(1);
            }
            Err(err) => println!("{}", err),
        },
        Command::Preview(aim) => {
            let cells = game.hover_preview(aim);
            let side = match game.phase() {
                Phase::Setup => Side::Player,
                _ => Side::Ai,
            };
            if cells.is_empty() {
                println!("Nothing to preview at {}.", aim);
            } else {
                show_board(game, side, &cells);
            }
        }
        Command::Board => {
            println!("Your board:");
            show_board(game, Side::Player, &[]);
            if game.phase() != Phase::Setup {
                println!();
                println!("Computer's board:");
                show_board(game, Side::Ai, &[]);
            }
        }
        Command::Help => println!(
            "Available Commands:
    place <ship> <row>,<col> [deg]  place a ship centered on the cell, rotated by 0, 90, 180
                                    or 270 degrees (default: the current rotation).
    select <ship>                   pick a ship to place with \"place <row>,<col>\".
    place <row>,<col>               place the selected ship.
    show <ship>                     highlight one of your placed ships.
    rotate                          rotate the ship being placed, or the weapon once
                                    the game has started.
    weapon <name>                   choose \"standard\", \"scanner\", \"torpedo\", \"rail\"
                                    or \"cluster\".
    preview <row>,<col>             show what placing or firing there would cover.
    fire <row>,<col>                fire the selected weapon. The computer replies.
    board                           show the boards.
    quit                            leave the game.

Available Ships:
    \"patrol\" (\"pt\"), \"submarine\" (\"ss\"), \"destroyer\" (\"dd\"),
    \"battleship\" (\"bb\"), \"carrier\" (\"cv\")"
        ),
        Command::Quit => process::exit(0),
    }
}

/// Print what the player needs to know before the next command.
fn show_status(game: &Game<StdRng>) {
    match game.phase() {
        Phase::Setup => {
            let pending: Vec<_> = game
                .fleet(Side::Player)
                .ships()
                .pending()
                .map(|kind| kind.name())
                .collect();
            println!("Remaining ships to place: {}", pending.join(", "));
            if let Some(kind) = game.ship_selection() {
                println!(
                    "Selected: {}, rotated {} degrees",
                    kind,
                    game.ship_orientation().degrees()
                );
            }
        }
        Phase::Playing => {
            let weapon = game.selected_weapon();
            print!("Weapon: {}", weapon);
            if let Some(left) = game.fleet(Side::Player).ammo().remaining(weapon) {
                print!(" ({} left)", left);
            }
            if weapon.is_rotatable() {
                print!(", rotated {} degrees", game.weapon_orientation().degrees());
            }
            println!();
        }
        Phase::Finished { .. } => {}
    }
}

fn report_volley(volley: &Volley) {
    let who = match volley.shooter {
        Side::Player => "You",
        Side::Ai => "The computer",
    };
    match volley.cells.as_slice() {
        [] => println!("{} fired the {} but every target was already hit.", who, volley.weapon),
        [single] => println!(
            "{} fired at {}: {}",
            who,
            single.coord,
            if single.shot.is_hit() { "hit!" } else { "miss." }
        ),
        cells => println!(
            "{} fired the {} over {} cells: {} hits.",
            who,
            volley.weapon,
            cells.len(),
            volley.hits()
        ),
    }
}

fn report_events(game: &mut Game<StdRng>) {
    for event in game.drain_events() {
        match event {
            GameEvent::Started => println!("The computer has placed its fleet. Fire when ready!"),
            GameEvent::ShipSunk {
                side: Side::Ai,
                kind,
            } => println!("You sank the computer's {}!", kind),
            GameEvent::ShipSunk {
                side: Side::Player,
                kind,
            } => println!("The computer sank your {}!", kind),
            GameEvent::Finished {
                winner: Side::Player,
            } => println!("You win!"),
            GameEvent::Finished { winner: Side::Ai } => println!("The computer wins."),
            GameEvent::CellUpdated { .. } | GameEvent::TurnChanged(_) => {}
        }
    }
}

/// How a cell is drawn.
enum ShownCell {
    Water,
    Miss,
    Ship(ShipKind),
    Hit(ShipKind),
    Sunk(ShipKind),
    Preview(Highlight),
}

impl fmt::Display for ShownCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShownCell::Water => f.pad("~~"),
            ShownCell::Miss => f.pad("x"),
            ShownCell::Ship(kind) => f.pad(abbrev(*kind)),
            ShownCell::Hit(kind) => f.pad(&format!("x{}", abbrev(*kind))),
            ShownCell::Sunk(kind) => f.pad(&format!("X{}", abbrev(*kind))),
            ShownCell::Preview(Highlight::Ok) => f.pad("++"),
            ShownCell::Preview(Highlight::Invalid) => f.pad("!!"),
            ShownCell::Preview(Highlight::Rail) => f.pad("<>"),
            ShownCell::Preview(Highlight::Ship) => f.pad("##"),
        }
    }
}

fn abbrev(kind: ShipKind) -> &'static str {
    match kind {
        ShipKind::Patrol => "pt",
        ShipKind::Submarine => "ss",
        ShipKind::Destroyer => "dd",
        ShipKind::Battleship => "bb",
        ShipKind::Carrier => "cv",
    }
}

/// Print the weapon's firing pattern at the given rotation on a small grid.
fn show_pattern(weapon: Weapon, orientation: Orientation) {
    let cells: HashMap<_, _> = weapon.rotation_preview(orientation).into_iter().collect();
    for row in 0..3 {
        print!("   ");
        for col in 0..3 {
            let cell = match cells.get(&Coordinate::new(row, col)) {
                Some(&highlight) => ShownCell::Preview(highlight),
                None => ShownCell::Water,
            };
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Print a side's board. The computer's ships stay hidden until hit. Highlighted cells
/// are drawn over whatever is underneath.
fn show_board(game: &Game<StdRng>, side: Side, highlights: &[(Coordinate, Highlight)]) {
    let fleet = game.fleet(side);
    let highlights: HashMap<_, _> = highlights.iter().copied().collect();
    let highlights = &highlights;
    let rows = fleet.board().iter_rows().map(move |row| {
        row.map(move |(coord, state)| match highlights.get(&coord) {
            Some(&highlight) => ShownCell::Preview(highlight),
            None => match (state, fleet.ships().ship_at(coord)) {
                (CellState::Hit, Some(kind)) if fleet.is_sunk(kind) => ShownCell::Sunk(kind),
                (CellState::Hit, Some(kind)) => ShownCell::Hit(kind),
                (CellState::Ship, Some(kind)) if side == Side::Player => ShownCell::Ship(kind),
                (CellState::Miss, _) => ShownCell::Miss,
                _ => ShownCell::Water,
            },
        })
    });

    print!("   ");
    for i in 0..game.dimensions().cols() {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                println!();
                process::exit(0);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }
}
