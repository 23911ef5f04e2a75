//! Final net-profit breakdown: customs duty, VAT, and platform fee applied
//! on top of the gross profit.

use super::fees;
use serde::{Deserialize, Serialize};

/// Which costs count toward the customs-dutiable value.
///
/// Kept configurable; the default excludes marketplace fees from the base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutiableBase {
    /// Purchase cost plus shipping (default)
    #[default]
    CostPlusShipping,
    /// Purchase cost plus shipping plus marketplace fees
    CostShippingFees,
}

impl DutiableBase {
    fn amount(&self, cost_price: f64, shipping_jpy: f64, category_fee_jpy: f64) -> f64 {
        match self {
            DutiableBase::CostPlusShipping => cost_price + shipping_jpy,
            DutiableBase::CostShippingFees => cost_price + shipping_jpy + category_fee_jpy,
        }
    }
}

impl std::str::FromStr for DutiableBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cost_plus_shipping" | "cost+shipping" => Ok(DutiableBase::CostPlusShipping),
            "cost_shipping_fees" | "cost+shipping+fees" => Ok(DutiableBase::CostShippingFees),
            _ => Err(format!(
                "Unknown dutiable base: {}. Use: cost_plus_shipping, cost_shipping_fees",
                s
            )),
        }
    }
}

/// Inputs for the final profit computation.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalProfitParams {
    /// Selling price in JPY
    pub selling_price: f64,
    /// Purchase cost in JPY
    pub cost_price: f64,
    /// Selected shipping price in JPY
    pub shipping_jpy: f64,
    /// Marketplace category fee in JPY
    pub category_fee_jpy: f64,
    /// Customs duty rate in percent
    pub customs_rate: f64,
    /// Optional additional platform fee rate in percent
    pub platform_rate: f64,
    /// VAT rate in percent, applied when `include_vat` is set
    pub vat_rate: f64,
    /// Whether UK VAT applies (the 135 GBP threshold classification)
    pub include_vat: bool,
    /// Current GBP to JPY exchange rate, if known
    pub exchange_rate_gbp_to_jpy: Option<f64>,
    /// Which costs the customs duty is computed on
    pub dutiable_base: DutiableBase,
}

/// The tax-adjusted net-profit breakdown, all amounts in JPY.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalProfitDetail {
    pub gross_profit_jpy: f64,
    pub customs_duty_jpy: f64,
    pub vat_jpy: f64,
    pub platform_fee_jpy: f64,
    pub net_profit_jpy: f64,
}

/// Computes the final net-profit breakdown from the given parameters.
///
/// Customs duty is a percentage of the dutiable base. The VAT amount is a
/// percentage of the selling price and applies only when the VAT flag is set
/// and an exchange rate is available; without a rate the VAT figure is zero
/// rather than an error. Pure and stateless.
pub fn final_profit_detail(params: &FinalProfitParams) -> FinalProfitDetail {
    let landed =
        fees::actual_cost(params.cost_price, params.shipping_jpy, params.category_fee_jpy);
    let gross = fees::gross_profit(params.selling_price, landed);

    let dutiable =
        params.dutiable_base.amount(params.cost_price, params.shipping_jpy, params.category_fee_jpy);
    let customs_duty = dutiable * params.customs_rate / 100.0;

    let vat = if params.include_vat && params.exchange_rate_gbp_to_jpy.is_some() {
        params.selling_price * params.vat_rate / 100.0
    } else {
        0.0
    };

    let platform_fee = params.selling_price * params.platform_rate / 100.0;

    FinalProfitDetail {
        gross_profit_jpy: gross,
        customs_duty_jpy: customs_duty,
        vat_jpy: vat,
        platform_fee_jpy: platform_fee,
        net_profit_jpy: gross - customs_duty - vat - platform_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_params() -> FinalProfitParams {
        FinalProfitParams {
            selling_price: 10000.0,
            cost_price: 3000.0,
            shipping_jpy: 2000.0,
            category_fee_jpy: 1000.0,
            customs_rate: 4.0,
            platform_rate: 0.0,
            vat_rate: 20.0,
            include_vat: false,
            exchange_rate_gbp_to_jpy: Some(190.0),
            dutiable_base: DutiableBase::default(),
        }
    }

    #[test]
    fn test_customs_duty_on_cost_plus_shipping() {
        let detail = final_profit_detail(&make_params());

        // Dutiable base 3000 + 2000 = 5000, at 4%.
        assert_eq!(detail.customs_duty_jpy, 200.0);
        assert_eq!(detail.gross_profit_jpy, 4000.0);
        assert_eq!(detail.net_profit_jpy, 3800.0);
    }

    #[test]
    fn test_dutiable_base_excludes_fees_by_default() {
        let mut with_fees = make_params();
        with_fees.dutiable_base = DutiableBase::CostShippingFees;

        let default = final_profit_detail(&make_params());
        let extended = final_profit_detail(&with_fees);

        assert_eq!(default.customs_duty_jpy, 200.0);
        assert_eq!(extended.customs_duty_jpy, 240.0); // + 4% of the 1000 fee
    }

    #[test]
    fn test_vat_applied_when_flagged() {
        let mut params = make_params();
        params.include_vat = true;

        let detail = final_profit_detail(&params);
        assert_eq!(detail.vat_jpy, 2000.0); // 20% of 10000
        assert_eq!(detail.net_profit_jpy, 4000.0 - 200.0 - 2000.0);
    }

    #[test]
    fn test_vat_skipped_without_exchange_rate() {
        let mut params = make_params();
        params.include_vat = true;
        params.exchange_rate_gbp_to_jpy = None;

        let detail = final_profit_detail(&params);
        assert_eq!(detail.vat_jpy, 0.0);
    }

    #[test]
    fn test_platform_fee() {
        let mut params = make_params();
        params.platform_rate = 2.5;

        let detail = final_profit_detail(&params);
        assert_eq!(detail.platform_fee_jpy, 250.0);
        assert_eq!(detail.net_profit_jpy, 4000.0 - 200.0 - 250.0);
    }

    #[test]
    fn test_pure_and_repeatable() {
        let params = make_params();
        assert_eq!(final_profit_detail(&params), final_profit_detail(&params));
    }

    #[test]
    fn test_dutiable_base_from_str() {
        assert_eq!(
            "cost_plus_shipping".parse::<DutiableBase>().unwrap(),
            DutiableBase::CostPlusShipping
        );
        assert_eq!(
            "cost+shipping+fees".parse::<DutiableBase>().unwrap(),
            DutiableBase::CostShippingFees
        );
        assert!("everything".parse::<DutiableBase>().is_err());
    }
}
