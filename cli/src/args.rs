use anyhow::Context;
use clap::{Parser, ValueEnum};
use defuse_core::{CellCount, Coord, DeadMinePolicy, GameConfig, Preset, SafeZone};

use crate::command::Command;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper with neutralizers", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Board size and mine count to start from
    #[arg(short, long, value_enum, default_value_t = PresetArg::Standard)]
    pub preset: PresetArg,

    /// Override the preset's column count
    #[arg(long)]
    pub width: Option<Coord>,

    /// Override the preset's row count
    #[arg(long)]
    pub height: Option<Coord>,

    /// Override the preset's mine count
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Cells kept free of mines around the first reveal
    #[arg(long, value_enum, default_value_t = SafeZoneArg::Neighborhood)]
    pub safe_zone: SafeZoneArg,

    /// Whether opening a defused mine counts toward winning
    #[arg(long, value_enum, default_value_t = DeadMinesArg::Inert)]
    pub dead_mines: DeadMinesArg,

    /// Show every cell's label, hidden or not
    #[arg(long)]
    pub show_all: bool,

    /// Play these moves instead of reading stdin, e.g. `--moves 4,5 m0,0 7,2`
    #[arg(long, num_args = 1..)]
    pub moves: Vec<Command>,

    /// Print a JSON summary when play stops
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// 10x10, 18 mines
    Compact,
    /// 10x13, 15 mines
    Standard,
    /// 10x16, 12 mines
    Tall,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Compact => Preset::Compact,
            PresetArg::Standard => Preset::Standard,
            PresetArg::Tall => Preset::Tall,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SafeZoneArg {
    Disabled,
    Anchor,
    Neighborhood,
}

impl From<SafeZoneArg> for SafeZone {
    fn from(arg: SafeZoneArg) -> Self {
        match arg {
            SafeZoneArg::Disabled => SafeZone::Disabled,
            SafeZoneArg::Anchor => SafeZone::Anchor,
            SafeZoneArg::Neighborhood => SafeZone::Neighborhood,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeadMinesArg {
    Inert,
    Scored,
}

impl From<DeadMinesArg> for DeadMinePolicy {
    fn from(arg: DeadMinesArg) -> Self {
        match arg {
            DeadMinesArg::Inert => DeadMinePolicy::Inert,
            DeadMinesArg::Scored => DeadMinePolicy::Scored,
        }
    }
}

impl Args {
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = Preset::from(self.preset)
            .config()
            .with_safe_zone(self.safe_zone.into())
            .with_dead_mines(self.dead_mines.into());
        if let Some(width) = self.width {
            config.size.0 = width;
        }
        if let Some(height) = self.height {
            config.size.1 = height;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }

        config.validate().with_context(|| {
            format!(
                "cannot play a {}x{} board with {} mines",
                config.width(),
                config.height(),
                config.mines
            )
        })?;
        Ok(config)
    }
}
