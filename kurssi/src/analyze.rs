use kurssi_core::{
    AnalysisReport, DateRange, Granularity, KurssiError, TimeSeriesBundle, align_to_days_with,
    classify_with, highest, longest_downward_trend, lowest, time_to_buy_sell,
};

use crate::Kurssi;

impl Kurssi {
    /// Classify the sampling granularity of `bundle.prices`.
    #[must_use]
    pub fn granularity(&self, bundle: &TimeSeriesBundle) -> Granularity {
        classify_with(&bundle.prices, &self.cfg.align)
    }

    /// Build the full analysis report for a bundle.
    ///
    /// Behavior and trade-offs:
    /// - The bundle is validated first: the three series must have equal length
    ///   and price timestamps must strictly increase.
    /// - Sub-daily input is aligned to days unless disabled on the builder.
    /// - Trend, highest/lowest price and buy/sell read `days.prices`; highest
    ///   volume reads `days.total_volumes`.
    /// - Fewer than two days yields a flat trend and a zero-profit pair, each
    ///   flagged with an `InsufficientData` warning.
    ///
    /// # Errors
    /// Returns `Data` if the bundle fails validation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kurssi::analyze",
            skip(self, bundle),
            fields(len = bundle.len(), align = self.cfg.align_to_days),
            err,
        )
    )]
    pub fn analyze(&self, bundle: &TimeSeriesBundle) -> Result<AnalysisReport, KurssiError> {
        bundle.validate()?;

        let granularity = self.granularity(bundle);
        let days = if self.cfg.align_to_days {
            align_to_days_with(bundle, granularity, &self.cfg.align)
        } else {
            bundle.clone()
        };

        let mut warnings = Vec::new();
        let n = days.prices.len();
        if n < 2 {
            warnings.push(KurssiError::insufficient(format!(
                "downward trend over {n} day(s)"
            )));
            warnings.push(KurssiError::insufficient(format!(
                "buy/sell over {n} day(s)"
            )));
        }
        #[cfg(feature = "tracing")]
        for w in &warnings {
            tracing::debug!(warning = %w, "degenerate analytic");
        }

        Ok(AnalysisReport {
            granularity,
            downward_trend: longest_downward_trend(&days.prices),
            highest_volume: highest(&days.total_volumes),
            highest_price: highest(&days.prices),
            lowest_price: lowest(&days.prices),
            buy_sell: time_to_buy_sell(&days.prices),
            days,
            warnings,
        })
    }

    /// Decode a provider JSON payload and analyze it.
    ///
    /// # Errors
    /// Returns `Data` if the payload is not a valid bundle.
    pub fn analyze_json(&self, payload: &str) -> Result<AnalysisReport, KurssiError> {
        let bundle = TimeSeriesBundle::from_json(payload)?;
        self.analyze(&bundle)
    }

    /// Analyze only the samples whose timestamps fall in `range`.
    ///
    /// Classification runs on the sliced bundle, so a window holding a single
    /// day of hourly data still classifies as hourly.
    ///
    /// # Errors
    /// Returns `Data` if the full bundle fails validation.
    pub fn analyze_range(
        &self,
        bundle: &TimeSeriesBundle,
        range: &DateRange,
    ) -> Result<AnalysisReport, KurssiError> {
        bundle.validate()?;
        self.analyze(&bundle.slice_range(range))
    }
}
