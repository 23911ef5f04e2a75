//! Output formatting for evaluations and quotes (table, JSON, markdown, CSV).

use crate::calc::pipeline::Evaluation;
use crate::config::OutputFormat;
use crate::shipping::ShippingSelection;

/// Marker printed for values that cannot be computed yet.
const PENDING: &str = "pending";

/// Marker printed when no shipping method fits the package.
const NO_ELIGIBLE: &str = "no eligible method";

/// Formats pipeline output for display.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a full evaluation.
    pub fn format_evaluation(&self, eval: &Evaluation) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(eval).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_evaluation(eval),
            OutputFormat::Markdown => self.markdown_evaluation(eval),
            OutputFormat::Csv => self.csv_evaluation(eval),
        }
    }

    /// Formats a shipping selection on its own (the `shipping` subcommand).
    pub fn format_selection(&self, selection: &ShippingSelection) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(selection).unwrap_or_else(|_| "null".to_string())
            }
            _ => match selection.quote() {
                Some(quote) => format!("Method:  {}\nPrice:   {} JPY", quote.method, quote.price_jpy),
                None => NO_ELIGIBLE.to_string(),
            },
        }
    }

    // Table formatting

    fn table_evaluation(&self, eval: &Evaluation) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Shipping:      {}", shipping_cell(eval)));

        match eval.price_gbp {
            Some(gbp) => lines.push(format!("Price (GBP):   {:.2}", gbp)),
            None => lines.push(format!("Price (GBP):   {}", PENDING)),
        }

        lines.push(format!(
            "VAT:           {}",
            if eval.vat_applies { "applies (under 135 GBP)" } else { "not applicable" }
        ));

        match &eval.breakdown {
            Some(b) => {
                lines.push(format!("Category fee:  {:.0} JPY", b.category_fee_jpy));
                lines.push(format!("Actual cost:   {:.0} JPY", b.actual_cost_jpy));
                lines.push(format!("Gross profit:  {:.0} JPY", b.gross_profit_jpy));
                lines.push(format!("Margin:        {:.1}%", b.profit_margin * 100.0));
            }
            None => lines.push(format!("Profit:        {}", PENDING)),
        }

        if let Some(d) = &eval.detail {
            lines.push(format!("Customs duty:  {:.0} JPY", d.customs_duty_jpy));
            lines.push(format!("VAT amount:    {:.0} JPY", d.vat_jpy));
            lines.push(format!("Platform fee:  {:.0} JPY", d.platform_fee_jpy));
            lines.push(format!("Net profit:    {:.0} JPY", d.net_profit_jpy));
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_evaluation(&self, eval: &Evaluation) -> String {
        let mut lines = Vec::new();

        lines.push("## Profit breakdown".to_string());
        lines.push(String::new());
        lines.push(format!("- **Shipping:** {}", shipping_cell(eval)));

        match eval.price_gbp {
            Some(gbp) => lines.push(format!("- **Price (GBP):** {:.2}", gbp)),
            None => lines.push(format!("- **Price (GBP):** {}", PENDING)),
        }

        lines.push(format!(
            "- **VAT:** {}",
            if eval.vat_applies { "applies (under 135 GBP)" } else { "not applicable" }
        ));

        if let Some(b) = &eval.breakdown {
            lines.push(format!("- **Category fee:** {:.0} JPY", b.category_fee_jpy));
            lines.push(format!("- **Actual cost:** {:.0} JPY", b.actual_cost_jpy));
            lines.push(format!("- **Gross profit:** {:.0} JPY", b.gross_profit_jpy));
            lines.push(format!("- **Margin:** {:.1}%", b.profit_margin * 100.0));
        } else {
            lines.push(format!("- **Profit:** {}", PENDING));
        }

        if let Some(d) = &eval.detail {
            lines.push(format!("- **Customs duty:** {:.0} JPY", d.customs_duty_jpy));
            lines.push(format!("- **VAT amount:** {:.0} JPY", d.vat_jpy));
            lines.push(format!("- **Platform fee:** {:.0} JPY", d.platform_fee_jpy));
            lines.push(format!("- **Net profit:** {:.0} JPY", d.net_profit_jpy));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_evaluation(&self, eval: &Evaluation) -> String {
        let header = "method,shipping_jpy,category_fee_jpy,actual_cost_jpy,gross_profit_jpy,\
                      profit_margin,price_gbp,vat_applies,customs_duty_jpy,vat_jpy,\
                      platform_fee_jpy,net_profit_jpy";

        let (method, shipping_jpy) = match &eval.shipping {
            Some(selection) => match selection.quote() {
                Some(q) => (escape_csv(&q.method), format!("{}", q.price_jpy)),
                None => (String::new(), String::new()),
            },
            None => (String::new(), String::new()),
        };

        let (fee, cost, gross, margin) = match &eval.breakdown {
            Some(b) => (
                format!("{}", b.category_fee_jpy),
                format!("{}", b.actual_cost_jpy),
                format!("{}", b.gross_profit_jpy),
                format!("{}", b.profit_margin),
            ),
            None => Default::default(),
        };

        let gbp = eval.price_gbp.map(|g| format!("{:.2}", g)).unwrap_or_default();

        let (duty, vat, platform, net) = match &eval.detail {
            Some(d) => (
                format!("{}", d.customs_duty_jpy),
                format!("{}", d.vat_jpy),
                format!("{}", d.platform_fee_jpy),
                format!("{}", d.net_profit_jpy),
            ),
            None => Default::default(),
        };

        format!(
            "{}\n{},{},{},{},{},{},{},{},{},{},{},{}",
            header, method, shipping_jpy, fee, cost, gross, margin, gbp, eval.vat_applies, duty,
            vat, platform, net
        )
    }
}

fn shipping_cell(eval: &Evaluation) -> String {
    match &eval.shipping {
        Some(selection) => match selection.quote() {
            Some(quote) => format!("{} ({:.0} JPY)", quote.method, quote.price_jpy),
            None => NO_ELIGIBLE.to_string(),
        },
        None => PENDING.to_string(),
    }
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::detail::FinalProfitDetail;
    use crate::calc::pipeline::CalcBreakdown;
    use crate::shipping::ShippingQuote;

    fn make_evaluation() -> Evaluation {
        Evaluation {
            shipping: Some(ShippingSelection::Selected(ShippingQuote {
                method: "ePacket".to_string(),
                price_jpy: 2000.0,
            })),
            price_gbp: Some(52.63),
            vat_applies: true,
            breakdown: Some(CalcBreakdown {
                method: "ePacket".to_string(),
                shipping_jpy: 2000.0,
                category_fee_jpy: 1000.0,
                actual_cost_jpy: 6000.0,
                gross_profit_jpy: 4000.0,
                profit_margin: 0.4,
            }),
            detail: Some(FinalProfitDetail {
                gross_profit_jpy: 4000.0,
                customs_duty_jpy: 200.0,
                vat_jpy: 2000.0,
                platform_fee_jpy: 0.0,
                net_profit_jpy: 1800.0,
            }),
        }
    }

    fn pending_evaluation() -> Evaluation {
        Evaluation {
            shipping: None,
            price_gbp: None,
            vat_applies: false,
            breakdown: None,
            detail: None,
        }
    }

    #[test]
    fn test_table_full() {
        let output = Formatter::new(OutputFormat::Table).format_evaluation(&make_evaluation());

        assert!(output.contains("ePacket (2000 JPY)"));
        assert!(output.contains("applies (under 135 GBP)"));
        assert!(output.contains("Gross profit:  4000 JPY"));
        assert!(output.contains("Margin:        40.0%"));
        assert!(output.contains("Net profit:    1800 JPY"));
    }

    #[test]
    fn test_table_pending() {
        let output = Formatter::new(OutputFormat::Table).format_evaluation(&pending_evaluation());

        assert!(output.contains("Shipping:      pending"));
        assert!(output.contains("Profit:        pending"));
        assert!(output.contains("not applicable"));
        assert!(!output.contains("Net profit"));
    }

    #[test]
    fn test_table_no_eligible_method() {
        let mut eval = pending_evaluation();
        eval.shipping = Some(ShippingSelection::NoneEligible);

        let output = Formatter::new(OutputFormat::Table).format_evaluation(&eval);
        assert!(output.contains("no eligible method"));
    }

    #[test]
    fn test_json_full() {
        let output = Formatter::new(OutputFormat::Json).format_evaluation(&make_evaluation());

        assert!(output.contains("\"method\": \"ePacket\""));
        assert!(output.contains("\"vat_applies\": true"));
        assert!(output.contains("\"net_profit_jpy\": 1800.0"));
    }

    #[test]
    fn test_json_pending_fields_omitted() {
        let output = Formatter::new(OutputFormat::Json).format_evaluation(&pending_evaluation());

        assert!(!output.contains("shipping"));
        assert!(!output.contains("breakdown"));
        assert!(output.contains("\"vat_applies\": false"));
    }

    #[test]
    fn test_json_none_eligible_is_null() {
        let mut eval = pending_evaluation();
        eval.shipping = Some(ShippingSelection::NoneEligible);

        let output = Formatter::new(OutputFormat::Json).format_evaluation(&eval);
        assert!(output.contains("\"shipping\": null"));
    }

    #[test]
    fn test_markdown() {
        let output = Formatter::new(OutputFormat::Markdown).format_evaluation(&make_evaluation());

        assert!(output.starts_with("## Profit breakdown"));
        assert!(output.contains("- **Net profit:** 1800 JPY"));
    }

    #[test]
    fn test_csv_full() {
        let output = Formatter::new(OutputFormat::Csv).format_evaluation(&make_evaluation());

        let mut lines = output.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();

        assert!(header.starts_with("method,shipping_jpy"));
        assert!(row.starts_with("ePacket,2000,1000,6000,4000,0.4,52.63,true"));
    }

    #[test]
    fn test_csv_pending_cells_empty() {
        let output = Formatter::new(OutputFormat::Csv).format_evaluation(&pending_evaluation());

        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with(",,,,,,"));
        assert!(row.contains("false"));
    }

    #[test]
    fn test_csv_escapes_method_with_comma() {
        let mut eval = make_evaluation();
        if let Some(ShippingSelection::Selected(quote)) = &mut eval.shipping {
            quote.method = "EMS, tracked".to_string();
        }

        let output = Formatter::new(OutputFormat::Csv).format_evaluation(&eval);
        assert!(output.contains("\"EMS, tracked\""));
    }

    #[test]
    fn test_format_selection_table() {
        let selection = ShippingSelection::Selected(ShippingQuote {
            method: "EMS".to_string(),
            price_jpy: 4500.0,
        });

        let output = Formatter::new(OutputFormat::Table).format_selection(&selection);
        assert!(output.contains("Method:  EMS"));
        assert!(output.contains("Price:   4500 JPY"));

        let none = Formatter::new(OutputFormat::Table).format_selection(&ShippingSelection::NoneEligible);
        assert_eq!(none, "no eligible method");
    }

    #[test]
    fn test_format_selection_json() {
        let selection = ShippingSelection::Selected(ShippingQuote {
            method: "EMS".to_string(),
            price_jpy: 4500.0,
        });

        let output = Formatter::new(OutputFormat::Json).format_selection(&selection);
        assert!(output.contains("\"method\": \"EMS\""));

        let none = Formatter::new(OutputFormat::Json).format_selection(&ShippingSelection::NoneEligible);
        assert_eq!(none, "null");
    }
}
