#![cfg(feature = "std")]

//! Text adapter: stdin answers and printed boards/banners.

use std::io::{self, BufRead, Write};

use crate::{
    board::{Symbol, View},
    config::GRID,
    human::InputProvider,
    session::{GameEvent, GameView},
    turn::{PlayerId, TurnHandoff},
};

/// Reads answers from standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end().to_string()),
        }
    }

    fn notify(&mut self, message: &str) {
        println!("✗ {}", message);
    }
}

fn print_grid(title: &str, view: &View) {
    println!("{}", title);
    print!("   ");
    for c in 0..GRID {
        print!(" {}", (b'A' + c as u8) as char);
    }
    println!();
    for (r, row) in view.iter().enumerate() {
        print!("{:2} ", r + 1);
        for sym in row.iter() {
            print!(" {}", sym);
        }
        println!();
    }
}

/// Prints boards and banners to standard output.
///
/// Seats marked in `pause_for` are human; their turn boundaries wait for
/// Enter so the device can be handed over.
pub struct TerminalView {
    pause_for: [bool; 2],
    names: [String; 2],
}

impl TerminalView {
    pub fn new(names: [String; 2], pause_for: [bool; 2]) -> Self {
        Self { pause_for, names }
    }

    fn wait_for_enter(&self, banner: &str) {
        println!("{} (Press Enter)", banner);
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }

    fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }
}

impl TurnHandoff for TerminalView {
    fn begin_turn(&mut self, player: PlayerId) {
        let banner = format!("Begin {}'s Turn", self.name(player));
        if self.pause_for[player.index()] {
            self.wait_for_enter(&banner);
        } else {
            println!("{}", banner);
        }
    }

    fn end_turn(&mut self, player: PlayerId) {
        let banner = format!("End {}'s Turn", self.name(player));
        if self.pause_for[player.index()] && self.pause_for[player.other().index()] {
            self.wait_for_enter(&banner);
            // Push the previous board off screen before the next player looks.
            print!("{}", "\n".repeat(40));
        } else {
            println!("{}", banner);
        }
    }
}

impl GameView for TerminalView {
    fn symbol_key(&mut self) {
        println!("Symbol Key for Battleship:");
        for (sym, label) in Symbol::LEGEND {
            println!("\t{}: {}", label, sym);
        }
        println!();
    }

    fn show_own_board(&mut self, player: PlayerId, view: &View) {
        if self.pause_for[player.index()] {
            print_grid("Here is your board:", view);
        }
    }

    fn show_opponent_board(&mut self, player: PlayerId, view: &View) {
        if self.pause_for[player.index()] {
            print_grid("Here is your opponent's board:", view);
        }
    }

    fn event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Shot { player, target, .. } if !self.pause_for[player.index()] => {
                println!("{} fires at {}: {}", self.name(player), target, event);
            }
            GameEvent::Airstrike { player, .. } if !self.pause_for[player.index()] => {
                println!("{} calls an airstrike. {}", self.name(player), event);
            }
            GameEvent::AirstrikeEarned { player } if !self.pause_for[player.index()] => {}
            GameEvent::GameOver { winner } => {
                println!("GAME OVER: {} wins!", self.name(winner));
            }
            _ => println!("{}", event),
        }
    }
}
