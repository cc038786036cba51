use clap::{Parser, ValueEnum};
use diagram_paginator::constants::{DEFAULT_INPUT, DEFAULT_MARGIN, DEFAULT_OUTPUT};
use diagram_paginator::{Orientation, PageSize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "paginate-diagram")]
#[command(about = "Split a diagram image across two large-format PDF pages")]
#[command(version)]
pub struct Cli {
    /// Source raster image
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Destination PDF
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Physical page size
    #[arg(long, value_enum, default_value_t = PageSizeArg::A3)]
    pub page_size: PageSizeArg,

    /// Use portrait instead of landscape pages
    #[arg(long)]
    pub portrait: bool,

    /// Margin on every side, in points
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSizeArg {
    A3,
    A4,
    Letter,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A3 => PageSize::A3,
            PageSizeArg::A4 => PageSize::A4,
            PageSizeArg::Letter => PageSize::Letter,
        }
    }
}

impl Cli {
    pub fn orientation(&self) -> Orientation {
        if self.portrait {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}
