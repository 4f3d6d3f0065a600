//! Initialize a new blog directory

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# ghblog-rs configuration

# Site
title: Blog
description: ''
author: ''
language: en

# Repository holding the posts
github:
  owner: alemanoelsilva
  repo: alemanoelsilva.github.io
  branch: master
  posts_dir: _posts
  api_url: https://api.github.com
  raw_url: https://raw.githubusercontent.com
  # token: read from GITHUB_TOKEN when unset

# Outbound requests
http:
  timeout_secs: 30
  # posts fetched at once while building the listing
  concurrency: 1

# Writing
front_matter:
  delimiter: '---'
  # remainder: body runs to the end of the file
  # legacy: body stops at the next delimiter
  split: remainder
excerpt_length: 150
highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false

# Date format
date_format: M/D/YYYY

# Static files served next to the pages
static_dir: static
"#;

const DEFAULT_STYLE: &str = r#"body { max-width: 42rem; margin: 0 auto; padding: 1rem; font-family: sans-serif; line-height: 1.6; }
.site-title { font-weight: bold; text-decoration: none; }
.post-list { list-style: none; padding: 0; }
.post-list li { margin-bottom: 2rem; }
pre { overflow-x: auto; padding: 0.5rem; }
"#;

/// Initialize a blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("File already exists: {:?}", config_path);
    }

    fs::create_dir_all(target_dir.join("static/css"))?;
    fs::write(&config_path, DEFAULT_CONFIG)?;

    let style_path = target_dir.join("static/css/style.css");
    if !style_path.exists() {
        fs::write(&style_path, DEFAULT_STYLE)?;
    }

    Ok(())
}
