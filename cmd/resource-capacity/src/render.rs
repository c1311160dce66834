// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Table and CSV projections of a [`Report`].
//!
//! Both renderers format the same fields the same way: cores as an integer,
//! capacities with two decimals. They only differ in framing.

use std::io::Write;

use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::Deserialize;

use crate::errors::Result;
use crate::report::{Report, Row};
use crate::totals::ResourceTotals;

const TOTAL_LABEL: &str = "Total";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

/// Extra framing for CSV output. Both are off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvOptions {
    pub header: bool,
    pub totals: bool,
}

pub trait Renderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        (**self).render(report, out)
    }
}

impl OutputFormat {
    pub fn renderer(self, csv: CsvOptions) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Table => Box::new(TableRenderer),
            OutputFormat::Csv => Box::new(CsvRenderer { options: csv }),
        }
    }
}

pub fn format_gib(gib: f64) -> String {
    format!("{gib:.2}")
}

fn header(include_platform: bool) -> Vec<&'static str> {
    let mut columns = vec!["Name"];
    if include_platform {
        columns.push("Platform");
    }
    columns.extend(["CPU", "RAM", "Network HDD", "Network SSD"]);
    columns
}

fn row_fields(row: &Row, include_platform: bool) -> Vec<String> {
    let mut fields = vec![row.name.clone()];
    if include_platform {
        fields.push(row.platform.clone().unwrap_or_default());
    }
    fields.extend([
        row.cores.to_string(),
        format_gib(row.memory_gib),
        format_gib(row.disks.hdd_gib),
        format_gib(row.disks.ssd_gib),
    ]);
    fields
}

fn totals_fields(totals: &ResourceTotals, include_platform: bool) -> Vec<String> {
    let mut fields = vec![TOTAL_LABEL.to_string()];
    if include_platform {
        fields.push(String::new());
    }
    fields.extend([
        totals.cores.to_string(),
        format_gib(totals.memory_gib),
        format_gib(totals.disks.hdd_gib),
        format_gib(totals.disks.ssd_gib),
    ]);
    fields
}

/// Box-drawn table with a header and a `Total` footer row. The footer sits
/// below the same double rule that closes the header.
pub struct TableRenderer;

impl TableRenderer {
    pub fn table(report: &Report) -> Table {
        let include_platform = report.include_platform;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            header(include_platform)
                .into_iter()
                .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
        );

        for row in &report.rows {
            table.add_row(row_fields(row, include_platform));
        }
        table.add_row(
            totals_fields(&report.totals, include_platform)
                .into_iter()
                .map(|field| Cell::new(field).add_attribute(Attribute::Bold)),
        );

        // Name and platform stay left aligned, numbers go right.
        let first_numeric = if include_platform { 2 } else { 1 };
        for column in table.column_iter_mut().skip(first_numeric) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        table
    }
}

impl Renderer for TableRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", mark_footer(&Self::table(report).to_string()))?;
        Ok(())
    }
}

// comfy-table has no footer section. The footer is the last row, so the last
// row divider is redrawn with the header's double rule.
fn mark_footer(rendered: &str) -> String {
    let lines: Vec<&str> = rendered.lines().collect();
    let divider = lines.iter().rposition(|line| line.starts_with('├'));
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if Some(i) == divider {
                line.chars().map(double_rule).collect()
            } else {
                (*line).to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn double_rule(c: char) -> char {
    match c {
        '├' => '╞',
        '┤' => '╡',
        '┼' => '╪',
        '╌' | '─' => '═',
        other => other,
    }
}

/// One comma-separated line per row.
pub struct CsvRenderer {
    pub options: CsvOptions,
}

impl Renderer for CsvRenderer {
    fn render(&self, report: &Report, out: &mut dyn Write) -> Result<()> {
        let include_platform = report.include_platform;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        if self.options.header {
            writer.write_record(header(include_platform))?;
        }
        for row in &report.rows {
            writer.write_record(row_fields(row, include_platform))?;
        }
        if self.options.totals {
            writer.write_record(totals_fields(&report.totals, include_platform))?;
        }
        writer.flush()?;
        Ok(())
    }
}
