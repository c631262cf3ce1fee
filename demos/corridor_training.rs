//! Train an option to cross a corridor zone boundary, then replay it.
//!
//! A minimal stand-in for the real driving loop: a 1-D corridor whose cells
//! pair up into zones, one trainable option anchored in the first zone and
//! aimed at the second. Training runs epsilon-greedy invocations with a
//! progress bar; afterwards the option replays its learned policy greedily.

use indicatif::{ProgressBar, ProgressStyle};
use optiq::{Action, LearnedOption, Observation, OptionConfig, OptionPolicy, StateId, ZoneId};

const LENGTH: u64 = 8;
const ZONE_WIDTH: u64 = 2;
const ACTIONS: usize = 3; // 0 = no-op, 1 = left, 2 = right
const START: u64 = 1;
const EPISODES: u64 = 300;
const MAX_STEPS: usize = 50;

struct Corridor {
    position: u64,
}

impl Corridor {
    fn observe(&self) -> Observation {
        Observation::new(
            ZoneId::new(self.position / ZONE_WIDTH),
            StateId::new(self.position),
        )
    }

    fn step(&mut self, action: Action) -> (f64, Observation) {
        match action {
            Action::Primitive(1) => self.position = self.position.saturating_sub(1),
            Action::Primitive(2) => self.position = (self.position + 1).min(LENGTH - 1),
            _ => {}
        }
        let reward = if self.position == LENGTH - 1 { 1.0 } else { 0.0 };
        (reward, self.observe())
    }
}

fn run_invocation(option: &mut LearnedOption, env: &mut Corridor) -> anyhow::Result<bool> {
    env.position = START;
    option.reset(env.observe().zone, StateId::new(START), ZoneId::new(1))?;
    for _ in 0..MAX_STEPS {
        let action = option.act()?;
        let (reward, observed) = env.step(action);
        if option.update_option(reward, observed, action, 3)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn main() -> anyhow::Result<()> {
    let config = OptionConfig::default()
        .with_learning_rate(0.3)
        .with_explore_probability(0.5);
    let mut option = LearnedOption::new(ACTIONS, false, config)?.with_seed(42);
    let mut env = Corridor { position: START };

    let progress = ProgressBar::new(EPISODES);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")
            .expect("valid template"),
    );
    progress.set_message("training");

    let mut completed = 0u64;
    for _ in 0..EPISODES {
        if run_invocation(&mut option, &mut env)? {
            completed += 1;
        }
        progress.inc(1);
    }
    progress.finish_with_message(format!("training done, {completed}/{EPISODES} terminated"));

    let q = option.q_table().expect("table created on reset");
    println!("\nLearned values from the start cell:");
    for action in 0..ACTIONS {
        let value = q
            .value(StateId::new(START), Action::Primitive(action))
            .unwrap_or(0.0);
        println!("  action {action}: {value:+.3}");
    }

    option.set_play(true);
    env.position = START;
    option.reset(env.observe().zone, StateId::new(START), ZoneId::new(1))?;
    print!("\nGreedy replay: {START}");
    for _ in 0..10 {
        let action = option.act()?;
        let (reward, observed) = env.step(action);
        print!(" -> {}", env.position);
        if option.update_option(reward, observed, action, 3)? {
            break;
        }
    }
    println!("\n{option} reached {}", env.observe().zone);
    Ok(())
}
