use std::path::PathBuf;

use jeonlog_core::models::SortMode;

use crate::cli::ConfigCommands;
use crate::commands::common::CliContext;
use crate::config::{normalize_text_option, CliProfile, CliProfilesConfig};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_profile: Option<&str>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init {
            profile,
            author_name,
            author_avatar,
            catalog_path,
            db_path,
            sort,
            no_activate,
        } => run_config_init(
            profile.as_deref().or(global_profile),
            ProfileUpdate {
                author_name,
                author_avatar,
                catalog_path,
                db_path,
                sort: sort.map(SortMode::from),
            },
            no_activate,
        ),
        ConfigCommands::Show { profile } => run_config_show(profile.as_deref().or(global_profile)),
    }
}

/// Explicit values from `config init`; `None` keeps what the profile has.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub author_name: Option<String>,
    pub author_avatar: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub sort: Option<SortMode>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &mut CliProfile) {
        if let Some(value) = normalize_text_option(self.author_name) {
            profile.author_name = Some(value);
        }
        if let Some(value) = normalize_text_option(self.author_avatar) {
            profile.author_avatar = Some(value);
        }
        if let Some(value) = self.catalog_path {
            profile.catalog_path = Some(value);
        }
        if let Some(value) = self.db_path {
            profile.db_path = Some(value);
        }
        if let Some(value) = self.sort {
            profile.sort = Some(value);
        }
    }
}

pub fn run_config_init(
    profile_name: Option<&str>,
    update: ProfileUpdate,
    no_activate: bool,
) -> Result<(), CliError> {
    let mut config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let profile_name = config.resolve_profile_name(profile_name);

    if let Some(path) = &update.catalog_path {
        jeonlog_core::StaticCatalog::load(path)?;
    }

    update.apply(config.profile_mut_or_default(&profile_name));

    if !no_activate {
        config.active_profile = Some(profile_name.clone());
    }

    let path = config.save().map_err(CliError::Config)?;
    println!(
        "Profile '{}' initialized at {}",
        profile_name,
        path.display()
    );

    let profile = config
        .profile(&profile_name)
        .ok_or_else(|| CliError::Config("Failed to persist profile".to_string()))?;
    if profile.author_name.is_none() {
        println!("Profile '{profile_name}' has no author name; feed items will show 'user'.");
    }

    Ok(())
}

pub fn run_config_show(profile_name: Option<&str>) -> Result<(), CliError> {
    let config = CliProfilesConfig::load().map_err(CliError::Config)?;
    let name = config.resolve_profile_name(profile_name);
    let profile = config.resolved_profile(Some(&name));
    let ctx = CliContext::resolve(None, None, None, &profile);

    println!("profile:  {name}");
    println!("author:   {}", ctx.identity.display_name());
    println!("database: {}", ctx.db_path.display());
    println!(
        "catalog:  {}",
        ctx.catalog_path
            .as_ref()
            .map_or_else(|| "(built-in demo)".to_string(), |p| p.display().to_string())
    );
    println!("sort:     {}", ctx.sort);
    Ok(())
}
