use kurssi_core::{AlignConfig, KurssiConfig, KurssiError};

/// Analyzer that turns a price bundle into an [`AnalysisReport`](crate::AnalysisReport).
#[derive(Debug, Clone)]
pub struct Kurssi {
    pub(crate) cfg: KurssiConfig,
}

/// Builder for constructing a `Kurssi` analyzer with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct KurssiBuilder {
    cfg: KurssiConfig,
}

impl KurssiBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Sub-daily input is aligned to one sample per UTC day before analysis.
    /// - Classification thresholds are 720 s (five-minute) and 36 000 s (hourly),
    ///   measured on the first two samples only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: KurssiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set classification thresholds and aligner tuning.
    ///
    /// Behavior and trade-offs:
    /// - Thresholds are checked in [`build`](Self::build); an inverted or
    ///   non-positive pair is rejected there.
    /// - `skip_ahead_divisor` only changes how far the aligner jumps after a
    ///   pick. The selected samples are the same for every divisor.
    #[must_use]
    pub const fn align_config(mut self, align: AlignConfig) -> Self {
        self.cfg.align = align;
        self
    }

    /// Toggle day alignment of sub-daily input.
    ///
    /// Behavior and trade-offs:
    /// - When disabled, trend and buy/sell run over raw intraday samples, so a
    ///   "run" counts samples rather than days.
    /// - The reported granularity is still the classification of the input.
    #[must_use]
    pub const fn align_to_days(mut self, yes: bool) -> Self {
        self.cfg.align_to_days = yes;
        self
    }

    /// Build the `Kurssi` analyzer.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the alignment configuration is inconsistent.
    pub fn build(self) -> Result<Kurssi, KurssiError> {
        self.cfg.align.validate()?;
        Ok(Kurssi { cfg: self.cfg })
    }
}

impl Kurssi {
    /// Start building a new `Kurssi` instance.
    ///
    /// ```
    /// use kurssi::{AlignConfig, Kurssi};
    ///
    /// let kurssi = Kurssi::builder()
    ///     .align_config(AlignConfig { skip_ahead_divisor: 4, ..AlignConfig::default() })
    ///     .align_to_days(true)
    ///     .build()?;
    /// assert_eq!(kurssi.config().align.skip_ahead_divisor, 4);
    /// # Ok::<(), kurssi::KurssiError>(())
    /// ```
    #[must_use]
    pub fn builder() -> KurssiBuilder {
        KurssiBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &KurssiConfig {
        &self.cfg
    }
}
