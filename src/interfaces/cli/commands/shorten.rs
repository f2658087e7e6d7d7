//! Shorten command

use std::ops::Range;

use chrono::Utc;
use colored::Colorize;
use tracing::info;

use crate::config::StaticConfig;
use crate::form::{
    FormAction, FormSettings, MAX_DRAFT_ROWS, ShortenedEntry, ShortenerForm, SubmitOutcome,
    ValidationMode,
};
use crate::interfaces::cli::CliError;
use crate::logger::{EventLogger, LogLevel, LogPackage};

/// 把命令行参数填入表单草稿
///
/// 每个 URL 占一行，`expiry` 应用到所有行，`custom` 只允许单个 URL 时使用。
pub fn fill_batch(
    form: &mut ShortenerForm,
    urls: &[String],
    expiry: Option<&str>,
    custom: Option<&str>,
) -> Result<(), CliError> {
    if custom.is_some() && urls.len() != 1 {
        return Err(CliError::ParseError(
            "--custom can only be used with a single URL".to_string(),
        ));
    }

    for (index, url) in urls.iter().enumerate() {
        if index > 0 && !form.apply(FormAction::AddRow) {
            return Err(CliError::ParseError(format!(
                "At most {} URLs can be shortened at once",
                MAX_DRAFT_ROWS
            )));
        }
        form.apply(FormAction::SetUrl {
            index,
            value: url.clone(),
        });
        if let Some(expiry) = expiry {
            form.apply(FormAction::SetExpiry {
                index,
                value: expiry.to_string(),
            });
        }
        if let Some(custom) = custom {
            form.apply(FormAction::SetCustom {
                index,
                value: custom.to_string(),
            });
        }
    }
    Ok(())
}

fn print_entries(entries: &[ShortenedEntry]) {
    let now = Utc::now();
    println!("{}", "Shortened URLs:".bold().green());
    println!();
    for entry in entries {
        let mut info_parts = vec![format!(
            "{} -> {}",
            entry.short_url.cyan(),
            entry.original_url.blue().underline()
        )];

        if let Some(minutes) = entry.expiry_minutes {
            info_parts.push(
                format!(
                    "(expires in {} min, {} left)",
                    minutes,
                    entry.format_time_left(now)
                )
                .dimmed()
                .yellow()
                .to_string(),
            );
        }

        if let Some(custom) = &entry.custom {
            info_parts.push(format!("[custom: {}]", custom).magenta().to_string());
        }

        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Total {} short URLs",
        "ℹ".bold().blue(),
        entries.len().to_string().green()
    );
}

fn print_rejection(form: &ShortenerForm) {
    println!("{}", "Batch rejected, nothing was shortened:".bold().red());
    for message in form.errors().iter().flatten() {
        println!("  {} {}", "✗".bold().red(), message);
    }
}

/// 提交一批 URL 并打印结果
///
/// 校验失败时逐行打印错误并返回 `ValidationError`。
pub fn shorten_urls(
    config: &StaticConfig,
    urls: Vec<String>,
    expiry: Option<String>,
    custom: Option<String>,
    mode: Option<ValidationMode>,
    json: bool,
) -> Result<(), CliError> {
    let mut settings = FormSettings::from(&config.form);
    if let Some(mode) = mode {
        settings.mode = mode;
    }
    let mut form = ShortenerForm::new(settings);
    let logger = EventLogger::from_config(&config.collector);

    fill_batch(&mut form, &urls, expiry.as_deref(), custom.as_deref())?;

    let range: Range<usize> = match form.submit(Utc::now()) {
        SubmitOutcome::Committed(range) => range,
        SubmitOutcome::Rejected { .. } => {
            let banner = form.banner_error().unwrap_or_default().to_string();
            logger.log(
                LogLevel::Warn,
                LogPackage::Component,
                format!("Batch rejected: {}", banner),
            );
            if !json {
                print_rejection(&form);
            }
            return Err(CliError::ValidationError(banner));
        }
    };

    let entries = &form.entries()[range];
    for entry in entries {
        info!("Shortened {} -> {}", entry.original_url, entry.short_url);
        logger.log(
            LogLevel::Info,
            LogPackage::Component,
            format!("Shortened {} -> {}", entry.original_url, entry.short_url),
        );
    }

    if json {
        let output = serde_json::to_string_pretty(entries)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize: {}", e)))?;
        println!("{}", output);
    } else {
        print_entries(entries);
    }

    // 运行时关闭时会等待 spawn_blocking 中尚未完成的日志请求
    Ok(())
}
