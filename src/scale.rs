//! Chart scales.
//!
//! A scale owns the chart window and turns date ranges into positioned
//! [`ChartItem`]s. The resolver only talks to the [`ChartScale`] trait;
//! [`GanttScale`] is the stock implementation.
//!
//! # Positioning
//! Bars are placed in fractional scale units counted from the window
//! start. The unit depends on the [`ZoomLevel`]: with `Daily` zoom a bar
//! starting 36 hours after the window start sits at position 1.5.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::models::{ChartItem, DateRange, OperationId};

/// Window holder and chart item factory.
pub trait ChartScale {
    /// Sets the chart window.
    fn set_window(&mut self, window: DateRange);

    /// Builds an item for `range`, or `None` when the scale cannot show it.
    fn create_item(
        &self,
        id_label: &str,
        display_label: &str,
        source_id: OperationId,
        range: DateRange,
    ) -> Option<ChartItem>;
}

/// Time unit a scale positions bars in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoomLevel {
    /// One unit per hour.
    Hourly,
    /// One unit per day.
    #[default]
    Daily,
    /// One unit per week.
    Weekly,
}

impl ZoomLevel {
    /// Length of one scale unit.
    pub fn unit(&self) -> TimeDelta {
        match self {
            ZoomLevel::Hourly => TimeDelta::hours(1),
            ZoomLevel::Daily => TimeDelta::days(1),
            ZoomLevel::Weekly => TimeDelta::weeks(1),
        }
    }
}

/// Stock [`ChartScale`].
///
/// Refuses items when no window is set, when the item range is inverted,
/// or when it lies entirely outside the window. Accepted items are
/// clipped to the window for positioning; their `range` keeps the
/// original dates.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_gantt::models::{DateRange, OperationId};
/// use u_gantt::scale::{ChartScale, GanttScale, ZoomLevel};
///
/// let day = |d| NaiveDate::from_ymd_opt(2021, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let mut scale = GanttScale::new(ZoomLevel::Daily);
/// scale.set_window(DateRange::new(day(1), day(11)));
///
/// let item = scale
///     .create_item("1 10 Cut", "1 10 Cut", OperationId(7), DateRange::new(day(2), day(3)))
///     .unwrap();
/// assert_eq!(item.from, 1.0);
/// assert_eq!(item.to, 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GanttScale {
    zoom: ZoomLevel,
    window: Option<DateRange>,
}

impl GanttScale {
    /// Creates a scale with no window.
    pub fn new(zoom: ZoomLevel) -> Self {
        Self { zoom, window: None }
    }

    /// Sets the window up front.
    pub fn with_window(mut self, window: DateRange) -> Self {
        self.window = Some(window);
        self
    }

    /// Zoom level.
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// Current window, if one was set.
    pub fn window(&self) -> Option<DateRange> {
        self.window
    }

    /// Window length in scale units. Zero without a window.
    pub fn unit_count(&self) -> f64 {
        self.window
            .map(|w| self.to_units(w.duration()))
            .unwrap_or(0.0)
    }

    fn to_units(&self, delta: TimeDelta) -> f64 {
        delta.num_milliseconds() as f64 / self.zoom.unit().num_milliseconds() as f64
    }
}

impl ChartScale for GanttScale {
    fn set_window(&mut self, window: DateRange) {
        self.window = Some(window);
    }

    fn create_item(
        &self,
        id_label: &str,
        display_label: &str,
        source_id: OperationId,
        range: DateRange,
    ) -> Option<ChartItem> {
        let window = self.window?;
        if range.is_inverted() {
            return None;
        }
        let visible = range.clamp_to(&window)?;

        Some(ChartItem::new(
            id_label,
            display_label,
            source_id,
            range,
            self.to_units(visible.from - window.from),
            self.to_units(visible.to - window.from),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn scale(zoom: ZoomLevel) -> GanttScale {
        GanttScale::new(zoom).with_window(DateRange::new(at(1, 0), at(11, 0)))
    }

    fn item(scale: &GanttScale, from: NaiveDateTime, to: NaiveDateTime) -> Option<ChartItem> {
        scale.create_item("a", "a", OperationId(1), DateRange::new(from, to))
    }

    #[test]
    fn test_zoom_units() {
        assert_eq!(ZoomLevel::Hourly.unit(), TimeDelta::hours(1));
        assert_eq!(ZoomLevel::Daily.unit(), TimeDelta::days(1));
        assert_eq!(ZoomLevel::Weekly.unit(), TimeDelta::days(7));
        assert_eq!(ZoomLevel::default(), ZoomLevel::Daily);
    }

    #[test]
    fn test_unit_count() {
        assert!((scale(ZoomLevel::Daily).unit_count() - 10.0).abs() < 1e-10);
        assert!((scale(ZoomLevel::Hourly).unit_count() - 240.0).abs() < 1e-10);
        assert_eq!(GanttScale::new(ZoomLevel::Daily).unit_count(), 0.0);
    }

    #[test]
    fn test_item_positioned_in_units() {
        let s = scale(ZoomLevel::Daily);
        let it = item(&s, at(2, 12), at(4, 0)).unwrap();
        assert!((it.from - 1.5).abs() < 1e-10);
        assert!((it.to - 3.0).abs() < 1e-10);
        assert_eq!(it.range, DateRange::new(at(2, 12), at(4, 0)));
        assert_eq!(it.id_label, "a");
        assert_eq!(it.display_label, "a");
    }

    #[test]
    fn test_item_clipped_to_window() {
        let s = scale(ZoomLevel::Daily);
        let before_window = at(1, 0) - TimeDelta::days(2);
        let it = item(&s, before_window, at(2, 0)).unwrap();
        assert_eq!(it.from, 0.0);
        assert!((it.to - 1.0).abs() < 1e-10);
        // Unclipped dates are kept.
        assert_eq!(it.range.to, at(2, 0));
    }

    #[test]
    fn test_item_outside_window_refused() {
        let s = scale(ZoomLevel::Daily);
        assert!(item(&s, at(12, 0), at(13, 0)).is_none());
    }

    #[test]
    fn test_inverted_item_refused() {
        let s = scale(ZoomLevel::Daily);
        assert!(item(&s, at(3, 0), at(2, 0)).is_none());
    }

    #[test]
    fn test_no_window_refuses_everything() {
        let s = GanttScale::new(ZoomLevel::Weekly);
        assert!(s.window().is_none());
        assert!(item(&s, at(1, 0), at(2, 0)).is_none());
    }

    #[test]
    fn test_set_window() {
        let mut s = GanttScale::new(ZoomLevel::Hourly);
        let w = DateRange::new(at(1, 0), at(1, 8));
        s.set_window(w);
        assert_eq!(s.window(), Some(w));
        assert_eq!(s.zoom(), ZoomLevel::Hourly);
    }
}
