//! The scale bar ornament. Given the ground distance covered by a single screen point, it
//! picks a "nice" round distance which fits within a maximum width, and divides it into a
//! whole number of equal bars with a label at every boundary.

use crate::options::OrnamentVisibility;

/// One entry of a distance table: a round distance (meters or feet) and the number of equal
/// bars it is divided into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBarRow {
    pub distance: f64,
    pub number_of_bars: u32,
}

const fn row(distance: f64, number_of_bars: u32) -> ScaleBarRow {
    ScaleBarRow {
        distance,
        number_of_bars,
    }
}

pub(crate) const FEET_PER_METER: f64 = 3.28084;
pub(crate) const FEET_PER_MILE: f64 = 5280.;

/// Distances in meters, sorted ascending. Subdivisions are chosen so that every boundary
/// label is a round number.
const METRIC_TABLE: &[ScaleBarRow] = &[
    row(1., 2),
    row(2., 2),
    row(4., 2),
    row(10., 2),
    row(20., 2),
    row(50., 2),
    row(75., 3),
    row(100., 2),
    row(200., 2),
    row(300., 3),
    row(500., 2),
    row(1_000., 2),
    row(2_000., 2),
    row(3_000., 3),
    row(5_000., 2),
    row(10_000., 2),
    row(20_000., 2),
    row(30_000., 3),
    row(50_000., 2),
    row(100_000., 2),
    row(200_000., 2),
    row(300_000., 3),
    row(500_000., 2),
    row(800_000., 2),
];

/// Distances in feet, switching to whole miles at 5280.
const IMPERIAL_TABLE: &[ScaleBarRow] = &[
    row(4., 2),
    row(6., 2),
    row(10., 2),
    row(20., 2),
    row(30., 3),
    row(50., 2),
    row(75., 3),
    row(100., 2),
    row(200., 2),
    row(300., 3),
    row(400., 2),
    row(600., 3),
    row(800., 2),
    row(1_000., 2),
    row(2_000., 2),
    row(4_000., 2),
    row(FEET_PER_MILE, 2),
    row(FEET_PER_MILE * 2., 2),
    row(FEET_PER_MILE * 4., 2),
    row(FEET_PER_MILE * 6., 3),
    row(FEET_PER_MILE * 10., 2),
    row(FEET_PER_MILE * 20., 2),
    row(FEET_PER_MILE * 30., 3),
    row(FEET_PER_MILE * 50., 2),
    row(FEET_PER_MILE * 100., 2),
    row(FEET_PER_MILE * 200., 2),
    row(FEET_PER_MILE * 300., 3),
    row(FEET_PER_MILE * 400., 2),
];

/// Widest subdivision of any table row, sizing the bar and label pools.
const MAX_BARS: usize = 3;

const DEFAULT_MAXIMUM_WIDTH: f32 = 195.;

/// A single filled segment of the scale bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Width on screen, in points.
    pub width: f32,
    pub hidden: bool,
}

/// A boundary label. The zero label at the start of the bar is included.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// Distance from the start of the bar, in points.
    pub offset: f32,
    pub hidden: bool,
}

/// State of the scale bar. Bars and labels are pre-allocated once and toggled hidden when a
/// row with fewer subdivisions gets selected, so recomputation does not churn the consumer's
/// element pool.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    meters_per_point: Option<f64>,
    metric_locale: bool,
    maximum_width: f32,
    hidden: bool,
    bars: [Bar; MAX_BARS],
    labels: [Label; MAX_BARS + 1],
}

impl Default for ScaleBar {
    fn default() -> Self {
        Self {
            meters_per_point: None,
            metric_locale: true,
            maximum_width: DEFAULT_MAXIMUM_WIDTH,
            hidden: false,
            bars: [Bar {
                width: 0.,
                hidden: true,
            }; MAX_BARS],
            labels: std::array::from_fn(|_| Label {
                text: String::new(),
                offset: 0.,
                hidden: true,
            }),
        }
    }
}

impl ScaleBar {
    /// Ground distance covered by one screen point. Values which are not positive and finite
    /// are ignored, keeping the previously displayed state.
    pub fn set_meters_per_point(&mut self, value: f64) {
        if !(value.is_finite() && value > 0.) {
            log::debug!("Ignoring degenerate meters per point: {value}.");
            return;
        }

        self.meters_per_point = Some(value);
        self.recompute();
    }

    /// Switch between the metric and imperial distance tables. The ground distance covered
    /// by a screen point does not change, only the table it is matched against.
    pub fn set_metric_locale(&mut self, metric: bool) {
        if self.metric_locale != metric {
            self.metric_locale = metric;
            self.recompute();
        }
    }

    pub fn metric_locale(&self) -> bool {
        self.metric_locale
    }

    /// Widest the whole bar is allowed to get, in screen points.
    pub fn set_maximum_width(&mut self, width: f32) {
        if !(width.is_finite() && width > 0.) {
            log::debug!("Ignoring degenerate maximum width: {width}.");
            return;
        }

        self.maximum_width = width;
        self.recompute();
    }

    pub fn maximum_width(&self) -> f32 {
        self.maximum_width
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Table row matched against the current ground resolution, or `None` until the first
    /// camera update arrives.
    pub fn preferred_row(&self) -> Option<ScaleBarRow> {
        let units_per_point = self.units_per_point()?;
        let maximum_distance = f64::from(self.maximum_width) * units_per_point;

        Some(preferred_row(self.table(), maximum_distance))
    }

    /// Width the selected distance occupies on screen, in points. Stays below the maximum
    /// width except at coarse zooms where even the smallest table row does not fit.
    pub fn width(&self) -> Option<f32> {
        let units_per_point = self.units_per_point()?;

        Some((self.preferred_row()?.distance / units_per_point) as f32)
    }

    /// Number of equal bars the selected distance is divided into.
    pub fn number_of_bars(&self) -> u32 {
        self.preferred_row().map_or(0, |row| row.number_of_bars)
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Bars which should currently be drawn.
    pub fn visible_bars(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(|bar| !bar.hidden)
    }

    /// Labels which should currently be drawn. There is always one more than there are
    /// visible bars.
    pub fn visible_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(|label| !label.hidden)
    }

    pub(crate) fn apply_visibility(&mut self, visibility: OrnamentVisibility) {
        self.hidden = visibility == OrnamentVisibility::Hidden;
    }

    /// The selected distance expressed in the active table's linear unit: meters for metric,
    /// feet for imperial.
    fn units_per_point(&self) -> Option<f64> {
        self.meters_per_point.map(|meters| {
            if self.metric_locale {
                meters
            } else {
                meters * FEET_PER_METER
            }
        })
    }

    fn table(&self) -> &'static [ScaleBarRow] {
        if self.metric_locale {
            METRIC_TABLE
        } else {
            IMPERIAL_TABLE
        }
    }

    fn recompute(&mut self) {
        let Some(units_per_point) = self.units_per_point() else {
            return;
        };

        let maximum_distance = f64::from(self.maximum_width) * units_per_point;
        let row = preferred_row(self.table(), maximum_distance);
        let bar_width = (row.distance / units_per_point) as f32 / row.number_of_bars as f32;

        log::trace!("Selected {row:?} for {units_per_point} units per point.");

        for (n, bar) in self.bars.iter_mut().enumerate() {
            bar.hidden = n >= row.number_of_bars as usize;
            if !bar.hidden {
                bar.width = bar_width;
            }
        }

        for (n, label) in self.labels.iter_mut().enumerate() {
            label.hidden = n > row.number_of_bars as usize;
            if !label.hidden {
                label.offset = bar_width * n as f32;
                label.text = label_text(
                    row.distance * n as f64 / f64::from(row.number_of_bars),
                    self.metric_locale,
                );
            }
        }
    }
}

/// Select the largest row which does not exceed `maximum_distance`, falling back to the
/// smallest row at coarse zooms where nothing fits. Among rows of equal distance the later
/// one wins, which is the one with the finer subdivision.
fn preferred_row(table: &[ScaleBarRow], maximum_distance: f64) -> ScaleBarRow {
    let fitting = table.partition_point(|row| row.distance <= maximum_distance);

    table[fitting.saturating_sub(1)]
}

/// Human-readable distance. Metric distances of a kilometer and above are shown in
/// kilometers, imperial distances of a mile and above in miles.
fn label_text(distance: f64, metric: bool) -> String {
    let (value, unit) = if metric {
        if distance >= 1_000. {
            (distance / 1_000., "km")
        } else {
            (distance, "m")
        }
    } else if distance >= FEET_PER_MILE {
        (distance / FEET_PER_MILE, "mi")
    } else {
        (distance, "ft")
    };

    if distance == 0. {
        "0".to_owned()
    } else if value.fract() == 0. {
        format!("{value} {unit}")
    } else {
        format!("{value:.1} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Reverses the conversions the scale bar does to get a width in feet, the same way the
    /// imperial table was derived.
    fn meters_from_feet(scale_bar: &ScaleBar, distance: f64) -> f64 {
        distance / f64::from(scale_bar.maximum_width()) / FEET_PER_METER
    }

    #[test]
    fn every_imperial_row_is_selected_at_its_own_distance() {
        let mut scale_bar = ScaleBar::default();
        scale_bar.set_metric_locale(false);

        for row in IMPERIAL_TABLE {
            // Slightly above the row's own distance, so that the next row no longer fits.
            scale_bar.set_meters_per_point(meters_from_feet(&scale_bar, row.distance + 0.01));

            assert_eq!(row.number_of_bars, scale_bar.number_of_bars(), "{row:?}");
            assert_eq!(
                row.number_of_bars as usize,
                scale_bar.visible_bars().count(),
                "{row:?}"
            );
            assert_eq!(
                row.number_of_bars as usize + 1,
                scale_bar.visible_labels().count(),
                "{row:?}"
            );

            // Distances of a mile and above switch the unit.
            let last_label = scale_bar.visible_labels().last().unwrap();
            if row.distance >= FEET_PER_MILE {
                assert!(last_label.text.ends_with("mi"), "{}", last_label.text);
            } else {
                assert!(last_label.text.ends_with("ft"), "{}", last_label.text);
            }
        }
    }

    #[test]
    fn every_metric_row_is_selected_at_its_own_distance() {
        let mut scale_bar = ScaleBar::default();

        for row in METRIC_TABLE {
            scale_bar.set_meters_per_point(
                (row.distance + 0.01) / f64::from(scale_bar.maximum_width()),
            );

            assert_eq!(row.number_of_bars, scale_bar.number_of_bars(), "{row:?}");
            assert_eq!(
                row.number_of_bars as usize + 1,
                scale_bar.visible_labels().count(),
                "{row:?}"
            );
        }
    }

    #[test]
    fn switching_locale_keeps_the_ground_distance() {
        let mut scale_bar = ScaleBar::default();

        // One meter per point and 195 points of room select the 100 m row.
        scale_bar.set_meters_per_point(1.);
        assert_eq!(Some(row(100., 2)), scale_bar.preferred_row());

        // The same ground distance matched against the imperial table: 195 m is about
        // 640 ft, so 600 ft is the largest row which still fits.
        scale_bar.set_metric_locale(false);
        assert_eq!(Some(row(600., 3)), scale_bar.preferred_row());
        assert_eq!("200 ft", scale_bar.labels()[1].text);

        // And back, without any drift.
        scale_bar.set_metric_locale(true);
        assert_eq!(Some(row(100., 2)), scale_bar.preferred_row());
    }

    #[test]
    fn bars_are_equal_and_sum_to_the_row_width() {
        let mut scale_bar = ScaleBar::default();
        scale_bar.set_meters_per_point(1.);

        let widths: Vec<f32> = scale_bar.visible_bars().map(|bar| bar.width).collect();
        assert_eq!(2, widths.len());
        assert_relative_eq!(widths[0], widths[1]);
        assert_relative_eq!(widths.iter().sum::<f32>(), scale_bar.width().unwrap());
        assert!(scale_bar.width().unwrap() <= scale_bar.maximum_width());
    }

    #[test]
    fn labels_are_spread_along_the_bar() {
        let mut scale_bar = ScaleBar::default();
        scale_bar.set_meters_per_point(1.);

        let labels: Vec<&Label> = scale_bar.visible_labels().collect();
        assert_eq!("0", labels[0].text);
        assert_eq!("50 m", labels[1].text);
        assert_eq!("100 m", labels[2].text);

        assert_relative_eq!(labels[0].offset, 0.);
        assert_relative_eq!(labels[2].offset, scale_bar.width().unwrap());
    }

    #[test]
    fn extreme_resolutions_fall_back_to_the_table_ends() {
        let mut scale_bar = ScaleBar::default();

        // So fine a resolution that even the smallest row would overflow the maximum width.
        scale_bar.set_meters_per_point(1e-9);
        assert_eq!(Some(METRIC_TABLE[0]), scale_bar.preferred_row());
        assert!(scale_bar.width().unwrap() > scale_bar.maximum_width());

        // So coarse that every row fits with room to spare.
        scale_bar.set_meters_per_point(1e9);
        assert_eq!(
            Some(*METRIC_TABLE.last().unwrap()),
            scale_bar.preferred_row()
        );
    }

    #[test]
    fn degenerate_resolutions_keep_the_last_valid_state() {
        let mut scale_bar = ScaleBar::default();
        scale_bar.set_meters_per_point(1.);
        let before = scale_bar.clone();

        for value in [0., -1., f64::NAN, f64::INFINITY] {
            scale_bar.set_meters_per_point(value);
            assert_eq!(before, scale_bar, "{value}");
        }

        assert!(scale_bar.width().unwrap().is_finite());
    }

    #[test]
    fn nothing_is_visible_before_the_first_resolution_arrives() {
        let scale_bar = ScaleBar::default();

        assert_eq!(None, scale_bar.preferred_row());
        assert_eq!(None, scale_bar.width());
        assert_eq!(0, scale_bar.number_of_bars());
        assert_eq!(0, scale_bar.visible_bars().count());
        assert_eq!(0, scale_bar.visible_labels().count());
    }

    #[test]
    fn tables_are_sorted_and_fit_the_pools() {
        for table in [METRIC_TABLE, IMPERIAL_TABLE] {
            for pair in table.windows(2) {
                assert!(pair[0].distance < pair[1].distance, "{pair:?}");
            }

            for row in table {
                assert!(row.number_of_bars >= 1, "{row:?}");
                assert!(row.number_of_bars as usize <= MAX_BARS, "{row:?}");
            }
        }
    }

    #[test]
    fn label_text_follows_the_magnitude() {
        assert_eq!("0", label_text(0., true));
        assert_eq!("500 m", label_text(500., true));
        assert_eq!("1 km", label_text(1_000., true));
        assert_eq!("2.5 km", label_text(2_500., true));
        assert_eq!("400 ft", label_text(400., false));
        assert_eq!("0.5 mi", label_text(FEET_PER_MILE / 2., false));
        assert_eq!("2 mi", label_text(FEET_PER_MILE * 2., false));
    }
}
