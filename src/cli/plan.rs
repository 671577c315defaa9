//! `static-extract plan`: show what `build` would do, writing nothing.
//!
//! Static templates are not rendered, so no data file is needed.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::load_templates;
use crate::config::Config;
use crate::extract::{AssetKind, Placement, classify, head_location, placed_assets};
use crate::forest::TemplateForest;

/// Show static templates and where their tags will go, writing nothing.
#[derive(Args, Debug, Default)]
pub struct PlanCommand {
    /// Tera glob of templates to load
    #[arg(long, value_name = "GLOB")]
    pub templates: Option<String>,

    /// Prefix of the extracted files' URLs, e.g. /static
    #[arg(long, value_name = "PREFIX")]
    pub url_prefix: Option<String>,
}

/// One static template as `build` would treat it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAsset {
    pub name: String,
    pub kind: AssetKind,
    pub file_name: String,
    pub tag: String,
    pub placement: Placement,
}

/// Result of [`PlanCommand::run`].
#[derive(Debug, Default)]
pub struct Plan {
    pub assets: Vec<PlannedAsset>,
    /// Template receiving auto-injected tags, if any contains `</head>`.
    pub head: Option<String>,
}

impl PlanCommand {
    pub fn execute(self, config: Config, quiet: bool) -> Result<()> {
        let plan = self.run(config)?;
        if !quiet {
            print_plan(&plan);
        }
        Ok(())
    }

    pub fn run(&self, mut config: Config) -> Result<Plan> {
        if let Some(templates) = &self.templates {
            config.templates.clone_from(templates);
        }
        if let Some(url_prefix) = &self.url_prefix {
            config.url_prefix.clone_from(url_prefix);
        }

        let tera = load_templates(&config.templates)?;
        let placed = placed_assets(&tera);
        let head = head_location(&tera);

        let assets = tera
            .names()
            .into_iter()
            .filter_map(|name| {
                let classified = classify(&name)?;
                let mut placement = Placement::of(&name, &placed);
                if head.is_none() {
                    placement = placement.without_head();
                }
                Some(PlannedAsset {
                    kind: classified.kind,
                    file_name: classified.kind.file_name(classified.stem),
                    tag: classified.kind.tag(&config.url_prefix, classified.stem),
                    placement,
                    name: name.clone(),
                })
            })
            .collect();

        Ok(Plan {
            assets,
            head,
        })
    }
}

fn print_plan(plan: &Plan) {
    if plan.assets.is_empty() {
        println!("No static templates found");
        return;
    }

    for asset in &plan.assets {
        let placement = match asset.placement {
            Placement::Explicit => "explicit".normal(),
            Placement::Injected => "injected".normal(),
            Placement::Dropped => "dropped".red(),
        };
        println!(
            "{} {} -> {} ({})",
            asset.kind.to_string().cyan(),
            asset.name.bold(),
            asset.file_name,
            placement
        );
        println!("    {}", asset.tag.dimmed());
    }

    match &plan.head {
        Some(name) => println!("{}: tags are injected into '{}'", "Head".green().bold(), name),
        None if plan.assets.iter().any(|a| a.placement == Placement::Dropped) => println!(
            "{}: no template contains </head>; unplaced tags will be dropped",
            "Warning".yellow().bold()
        ),
        None => {}
    }
}
