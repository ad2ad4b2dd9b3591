//! Rendering of computed returns and BAS statements.

use std::fmt;

use au_tax_core::calculations::common::round_half_up;
use au_tax_core::{BasStatement, TaxReturn};
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Formats an amount as dollars and cents with thousands separators,
/// e.g. `-$1,234.57`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let mut magnitude = rounded.abs();
    magnitude.rescale(2);

    let text = magnitude.to_string();
    let cents = text.split_once('.').map_or("00", |(_, cents)| cents);

    let dollars = magnitude.trunc();
    let grouped = dollars
        .to_u128()
        .map_or_else(|| dollars.to_string(), |d| d.to_formatted_string(&Locale::en));

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// A tax return and BAS statement computed from the same statement.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub tax_return: TaxReturn,
    pub bas_statement: BasStatement,
}

impl EstimateReport {
    pub fn new(
        tax_return: TaxReturn,
        bas_statement: BasStatement,
    ) -> Self {
        Self {
            tax_return,
            bas_statement,
        }
    }

    /// Serialises the full report, unrounded, as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Human-readable summary with amounts rounded to cents.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    fn write_tax_return(
        &self,
        out: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = &self.tax_return;

        writeln!(out, "Tax return {} ({})", r.id, r.status.as_str())?;
        writeln!(out, "  Financial year     {}", r.financial_year)?;
        writeln!(out, "  Taxable income     {}", format_currency(r.taxable_income))?;
        writeln!(out, "  Tax payable        {}", format_currency(r.tax_payable))?;
        writeln!(
            out,
            "  Deductions         {} totalling {}",
            r.deductions.len(),
            format_currency(r.total_deductions())
        )?;
        for d in &r.deductions {
            writeln!(
                out,
                "    {:<14} {:<28} {:>14}  {}",
                d.id,
                d.category,
                format_currency(d.amount),
                d.description
            )?;
        }
        Ok(())
    }

    fn write_bas(
        &self,
        out: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = &self.bas_statement;

        writeln!(
            out,
            "BAS {} ({} to {}, {})",
            b.id,
            b.period.start_date,
            b.period.end_date,
            b.status.as_str()
        )?;
        writeln!(out, "  G1  Total sales         {}", format_currency(b.sales_total))?;
        writeln!(out, "      Total purchases     {}", format_currency(b.purchases_total))?;
        writeln!(out, "  1A  GST on sales        {}", format_currency(b.gst_collected))?;
        writeln!(out, "  1B  GST on purchases    {}", format_currency(b.gst_paid))?;
        writeln!(out, "      Net GST             {}", format_currency(b.gst_net_amount))?;
        if b.is_refund() {
            writeln!(out, "      Refundable          {}", format_currency(b.total_refundable))?;
        } else {
            writeln!(out, "      Payable             {}", format_currency(b.total_payable))?;
        }
        Ok(())
    }
}

impl fmt::Display for EstimateReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.write_tax_return(f)?;
        writeln!(f)?;
        self.write_bas(f)
    }
}
