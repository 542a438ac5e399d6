//! Sale listing normalization and cost-of-ownership estimation.

use serde_json::Value;

use realty_core::schema::{optional, require, require_nullable_str};
use realty_core::RealtyError;

use crate::details::facts::HomeFacts;
use crate::details::page::PreloadPage;

/// A normalized for-sale listing.
#[derive(Debug, Clone)]
pub struct SaleListing {
    pub facts: HomeFacts,
    pub parcel_number: Option<String>,
    /// The 30-year fixed mortgage rate advertised on the page, as a
    /// percentage.
    pub thirty_year_fixed_rate: Option<f64>,
}

/// Override knobs for [`SaleListing::estimated_monthly_cost`]. Every `None`
/// falls back to what the listing itself advertises.
#[derive(Debug, Clone, Default)]
pub struct CostOverrides {
    /// Yearly interest rate as a fraction (5% → 0.05). Falls back to the
    /// listing's 30-year fixed rate, then to 0.06.
    pub interest: Option<f64>,
    /// Mortgage length in months. Defaults to 360.
    pub months: Option<f64>,
    /// Yearly property tax rate as a fraction. Falls back to the listing's
    /// rate, then to zero.
    pub tax_rate: Option<f64>,
    /// Monthly home-insurance cost. Falls back to 0.42% of the price, the
    /// site's own estimation factor.
    pub home_insurance: Option<f64>,
    /// Monthly mortgage-insurance cost.
    pub mortgage_insurance: f64,
    /// Monthly HOA fee. Falls back to the listing's fee.
    pub hoa_fee: Option<f64>,
    /// Monthly utilities.
    pub utilities: f64,
}

impl SaleListing {
    /// Normalizes a sale listing from an extracted preload page.
    ///
    /// # Errors
    ///
    /// As [`HomeFacts::from_property`], plus failures on the sale-specific
    /// `resoFacts.parcelNumber` key.
    pub fn from_page(page: &PreloadPage) -> Result<Self, RealtyError> {
        let property = &page.property;
        let facts = HomeFacts::from_property(property)?;

        let reso = require(property, "resoFacts", "zillow sale property")?;
        let parcel_number =
            require_nullable_str(reso, "parcelNumber", "zillow sale property.resoFacts")?
                .map(str::to_owned);

        let thirty_year_fixed_rate = optional(property, "mortgageRates")
            .and_then(|rates| optional(rates, "thirtyYearFixedRate"))
            .and_then(Value::as_f64);

        Ok(Self {
            facts,
            parcel_number,
            thirty_year_fixed_rate,
        })
    }

    /// Estimates the all-in monthly cost of buying this listing with
    /// `down` paid up front.
    #[must_use]
    pub fn estimated_monthly_cost(&self, down: f64, overrides: &CostOverrides) -> f64 {
        let price = self.facts.price as f64;

        let interest = overrides
            .interest
            .or(self.thirty_year_fixed_rate.map(|r| r / 100.0))
            .unwrap_or(0.06);
        let months = overrides.months.unwrap_or(360.0);

        let mortgage = monthly_mortgage(price - down, interest / 12.0, months);

        let tax_rate = overrides
            .tax_rate
            .or(self.facts.property_tax_rate.map(|r| r / 100.0))
            .unwrap_or(0.0);
        let tax = tax_rate * price / 12.0;

        let insurance = overrides.home_insurance.unwrap_or(price * 0.0042);
        let hoa = overrides.hoa_fee.unwrap_or(self.facts.hoa_fee);

        mortgage + overrides.mortgage_insurance + tax + insurance + hoa + overrides.utilities
    }
}

/// Monthly payment on an amortized loan: `P * i(1+i)^m / ((1+i)^m - 1)`,
/// with `i` the monthly interest rate and `m` the number of months.
#[must_use]
pub fn monthly_mortgage(principal: f64, monthly_interest: f64, months: f64) -> f64 {
    if monthly_interest == 0.0 {
        return principal / months;
    }
    let growth = (1.0 + monthly_interest).powf(months);
    principal * (monthly_interest * growth) / (growth - 1.0)
}

#[cfg(test)]
#[path = "sale_test.rs"]
mod tests;
