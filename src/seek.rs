use crate::config::SeekBarConfig;
use crate::error::SeekError;
use crate::labels::LabelCache;
use crate::provider::{ElementProvider, SeekControl, TextLabel};
use crate::ui_time::format_clock;
use crate::util::SeekPosition;

/// Elapsed/remaining label text for one seek position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekReadout {
    pub elapsed: String,
    pub remaining: String,
}

impl SeekReadout {
    pub fn new(position: &SeekPosition, cfg: &SeekBarConfig) -> Self {
        let policy = cfg.display.clock_policy;
        Self {
            elapsed: format_clock(position.elapsed(), policy),
            remaining: format_clock(position.remaining(), policy),
        }
    }
}

/// Keeps the seek-bar time labels in step with the range input.
pub struct SeekTimes<P: ElementProvider> {
    cfg: SeekBarConfig,
    labels: LabelCache<P>,
}

impl<P: ElementProvider> SeekTimes<P> {
    pub fn new(cfg: SeekBarConfig) -> Self {
        Self {
            cfg,
            labels: LabelCache::new(),
        }
    }

    pub fn config(&self) -> &SeekBarConfig {
        &self.cfg
    }

    pub fn labels(&self) -> &LabelCache<P> {
        &self.labels
    }

    /// Forget the located labels, e.g. after the seek bar was re-rendered.
    pub fn reset(&mut self) {
        self.labels.reset();
    }

    /// Read the control and rewrite both labels. Invalid input leaves the
    /// labels untouched.
    pub fn update_seek_times<C: SeekControl + ?Sized>(
        &mut self,
        provider: &P,
        control: &C,
    ) -> Result<(), SeekError> {
        let value = control.value();
        let duration = control.attribute(&self.cfg.control.duration_attribute);
        let position = match SeekPosition::parse(&value, duration.as_deref()) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Seek times not updated: {e}");
                return Err(e);
            }
        };
        let readout = SeekReadout::new(&position, &self.cfg);

        let located = self.labels.get_or_locate(provider, &self.cfg.selectors)?;
        located.elapsed.set_text(&readout.elapsed);
        located.remaining.set_text(&readout.remaining);
        Ok(())
    }
}

impl<P: ElementProvider> Default for SeekTimes<P> {
    fn default() -> Self {
        Self::new(SeekBarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_time::ClockPolicy;

    #[test]
    fn readout_for_examples() {
        let cfg = SeekBarConfig::default();
        let r = SeekReadout::new(&SeekPosition::new(7200.0, 50.0), &cfg);
        assert_eq!(r.elapsed, "01:00:00");
        assert_eq!(r.remaining, "01:00:00");

        let r = SeekReadout::new(&SeekPosition::new(125.0, 0.0), &cfg);
        assert_eq!(r.elapsed, "00:00:00");
        assert_eq!(r.remaining, "00:02:05");
    }

    #[test]
    fn readout_follows_policy() {
        let mut cfg = SeekBarConfig::default();
        let pos = SeekPosition::new(180_000.0, 50.0);
        assert_eq!(SeekReadout::new(&pos, &cfg).elapsed, "25:00:00");
        cfg.display.clock_policy = ClockPolicy::TimeOfDay;
        assert_eq!(SeekReadout::new(&pos, &cfg).elapsed, "01:00:00");
    }
}
