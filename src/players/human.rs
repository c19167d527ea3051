use super::Player;
use crate::Item;
use crate::Outcome;
use crate::Points;
use crate::Round;
use crate::Verdict;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Select;

/// Terminal player. Draws the screen, picks moves from the lineup and
/// dismisses outcome dialogs through `dialoguer` prompts.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn screen(round: &Round) -> String {
        let mut lines = round.to_string().lines().map(String::from).collect::<Vec<_>>();
        if let Some(title) = lines.first_mut() {
            *title = title.as_str().bold().to_string();
        }
        lines.join("\n")
    }
    fn dialog(outcome: &Outcome) -> String {
        let title = match outcome.verdict() {
            Some(Verdict::Won) => outcome.title().green().bold(),
            Some(Verdict::Lost) => outcome.title().red().bold(),
            None => outcome.title().yellow().bold(),
        };
        format!("{}\n{}", title, outcome.remark())
    }
}

impl Player for Human {
    fn decide(&mut self, round: &Round) -> anyhow::Result<Item> {
        let lineup = round.lineup();
        let buttons = lineup.iter().map(Item::button).collect::<Vec<_>>();
        println!();
        println!("{}", Self::screen(round));
        let choice = Select::new()
            .with_prompt(format!("trial {}", round.trials() + 1))
            .report(false)
            .items(&buttons)
            .default(0)
            .interact()?;
        Ok(lineup[choice])
    }
    fn notify(&mut self, round: &Round, outcome: &Outcome) -> anyhow::Result<()> {
        println!();
        println!("{}", Self::dialog(outcome));
        if round.is_over() {
            println!("{}", format!("Total Points: {}", round.total()).bold());
            return Ok(());
        }
        Select::new()
            .report(false)
            .items(&[outcome.dismiss()])
            .default(0)
            .interact()?;
        Ok(())
    }
    fn again(&mut self, _: Points) -> anyhow::Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Play Again?")
            .default(true)
            .report(false)
            .interact()?)
    }
}
