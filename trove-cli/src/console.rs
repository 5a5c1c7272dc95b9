//! Interactive console: startup prompts, the per-turn menu, and narrative
//! echo. Generic over its input and output streams so tests can script a
//! whole game deterministically.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use trove_game::{Command, Ending, GameMode, Session, ShopIntent};

/// Startup choices, resolved from flags or prompts.
#[derive(Debug, Clone)]
pub struct GameOptions {
    pub name: Option<String>,
    pub mode: Option<GameMode>,
    pub seed: u64,
    pub test_kit: bool,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play one game to its ending.
    pub fn run(&mut self, opts: GameOptions) -> Result<Ending> {
        writeln!(self.output, "{}", "Welcome to TROVE!".bold())?;
        writeln!(self.output, "Going hunting for the big treasure, eh?")?;

        let name = match opts.name {
            Some(name) => name.to_lowercase(),
            None => self.prompt_name()?,
        };
        let mut test_kit = opts.test_kit;
        let mode = match opts.mode {
            Some(mode) => mode,
            None => self.prompt_mode(&mut test_kit)?,
        };

        let mut session = Session::new(&name, mode, opts.seed);
        if test_kit {
            session = session.with_test_kit();
        }
        debug!("starting {mode} game for {name}");

        loop {
            self.render_turn(&session)?;
            let Some(choice) = self.prompt("What's your next move? ")? else {
                session.apply(&Command::Quit);
                let ending = Ending::Quit;
                self.finish(&session, ending)?;
                return Ok(ending);
            };
            let command = match choice.as_str() {
                "b" => Command::Buy(self.prompt_shop(&session, ShopIntent::Buy)?),
                "s" => Command::Sell(self.prompt_shop(&session, ShopIntent::Sell)?),
                "m" => Command::Move,
                "l" => Command::LookForTrouble,
                "h" => Command::HuntForTreasure,
                "d" => Command::Dig,
                "x" => Command::Quit,
                _ => {
                    writeln!(
                        self.output,
                        "{}",
                        "Yikes! That's an invalid option! Try again.".red()
                    )?;
                    continue;
                }
            };
            let report = session.apply(&command);
            if let Some(farewell) = report.departed_news {
                writeln!(self.output, "{farewell}")?;
            }
            if let Some(ending) = session.ending() {
                self.finish(&session, ending)?;
                return Ok(ending);
            }
        }
    }

    fn prompt_name(&mut self) -> Result<String> {
        let name = self
            .prompt("What's your name, hunter? ")?
            .unwrap_or_default();
        if name.is_empty() {
            Ok("hunter".to_string())
        } else {
            Ok(name)
        }
    }

    /// Mode codes come from a fixed set; "test" is the normal game with the
    /// pre-equipped kit. Bad codes re-prompt.
    fn prompt_mode(&mut self, test_kit: &mut bool) -> Result<GameMode> {
        loop {
            let Some(code) = self.prompt("Choose mode (e, n, h or s): ")? else {
                return Ok(GameMode::default());
            };
            if code == "test" {
                *test_kit = true;
                return Ok(GameMode::default());
            }
            match code.parse::<GameMode>() {
                Ok(mode) => return Ok(mode),
                Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
            }
        }
    }

    fn prompt_shop(&mut self, session: &Session, intent: ShopIntent) -> Result<String> {
        let shop = session.town().shop();
        let verb = match intent {
            ShopIntent::Buy => "buy",
            ShopIntent::Sell => "sell",
        };
        writeln!(self.output, "On offer:")?;
        for (item, buy_price) in shop.wares() {
            let price = match intent {
                ShopIntent::Buy => buy_price,
                ShopIntent::Sell => shop.sell_price(item).unwrap_or(buy_price),
            };
            writeln!(self.output, "  {item} - {} gold", price.to_string().yellow())?;
        }
        Ok(self
            .prompt(&format!("What would you like to {verb}? "))?
            .unwrap_or_default())
    }

    fn render_turn(&mut self, session: &Session) -> Result<()> {
        let town = session.town();
        writeln!(self.output)?;
        writeln!(self.output, "{}", town.latest_news())?;
        writeln!(self.output, "{}", "***".dimmed())?;
        writeln!(self.output, "{}", session.hunter())?;
        writeln!(self.output, "{town}")?;
        writeln!(self.output, "{}", town.terrain().to_string().cyan())?;
        writeln!(self.output, "(B)uy something at the shop.")?;
        writeln!(self.output, "(S)ell something at the shop.")?;
        writeln!(self.output, "(M)ove on to a different town.")?;
        writeln!(self.output, "(L)ook for trouble!")?;
        writeln!(self.output, "(H)unt for treasure!")?;
        writeln!(self.output, "(D)ig for gold!")?;
        writeln!(self.output, "Give up the hunt and e(X)it.")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn finish(&mut self, session: &Session, ending: Ending) -> Result<()> {
        match ending {
            Ending::Broke => {
                writeln!(self.output, "{}", session.town().latest_news())?;
                writeln!(
                    self.output,
                    "{}",
                    "Game Over! You can't pay your debt!".red().bold()
                )?;
            }
            Ending::Won => {
                writeln!(
                    self.output,
                    "{}",
                    "Congratulations, you have found the last of the three treasures, you win!"
                        .green()
                        .bold()
                )?;
            }
            Ending::Quit => {
                writeln!(self.output, "Fare thee well, {}!", session.hunter().name())?;
            }
        }
        Ok(())
    }

    /// Print a prompt and read one lowercased line. `None` means the input
    /// stream ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading player input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}
