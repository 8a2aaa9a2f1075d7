//! Fake map surface with the ornament layer on top. The sliders play the role of the map
//! engine's camera.

use egui::{Align2, Color32, FontId, Painter, Rect, Slider, Stroke, Ui, pos2, vec2};
use ornaments::{CameraUpdate, OrnamentKind, Ornaments, lat_lon};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    eframe::run_native(
        "Ornaments demo",
        Default::default(),
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}

struct DemoApp {
    ornaments: Ornaments,
    latitude: f64,
    zoom: f64,
    bearing: f64,
    metric: bool,
}

impl DemoApp {
    fn new() -> Self {
        let mut ornaments = Ornaments::default();
        ornaments.set_logo_image_available(true);

        Self {
            ornaments,
            latitude: 51.09916,
            zoom: 12.,
            bearing: 0.,
            metric: true,
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.heading("Camera");
        ui.add(Slider::new(&mut self.zoom, 0.0..=19.0).text("Zoom"));
        ui.add(Slider::new(&mut self.latitude, -85.0..=85.0).text("Latitude"));
        ui.add(Slider::new(&mut self.bearing, 0.0..=360.0).text("Bearing"));
        ui.checkbox(&mut self.metric, "Metric units");
    }

    fn map_surface(&self, ui: &Ui) {
        let container = ui.max_rect();
        let painter = ui.painter();

        painter.rect_filled(container, 0., Color32::from_rgb(228, 235, 225));
        grid(painter, container);

        if !self.ornaments.hidden(OrnamentKind::ScaleBar) {
            scale_bar(painter, container, &self.ornaments);
        }

        if !self.ornaments.hidden(OrnamentKind::Compass) {
            compass(painter, container, &self.ornaments);
        }

        if !self.ornaments.hidden(OrnamentKind::Logo) {
            logo(painter, container, &self.ornaments);
        }

        if !self.ornaments.hidden(OrnamentKind::Attribution) {
            attribution(painter, container, &self.ornaments);
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        // Pretend the map engine just moved its camera.
        self.ornaments.on_camera_changed(&CameraUpdate {
            center: Some(lat_lon(self.latitude, 17.03664)),
            zoom: Some(self.zoom),
            bearing: Some(self.bearing),
        });
        self.ornaments.scale_bar_mut().set_metric_locale(self.metric);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.map_surface(ui);
        });
    }
}

fn grid(painter: &Painter, container: Rect) {
    let stroke = Stroke::new(1., Color32::from_rgb(203, 212, 200));

    let mut x = container.left();
    while x < container.right() {
        painter.line_segment(
            [pos2(x, container.top()), pos2(x, container.bottom())],
            stroke,
        );
        x += 48.;
    }

    let mut y = container.top();
    while y < container.bottom() {
        painter.line_segment(
            [pos2(container.left(), y), pos2(container.right(), y)],
            stroke,
        );
        y += 48.;
    }
}

fn scale_bar(painter: &Painter, container: Rect, ornaments: &Ornaments) {
    let (Some(anchor), Some(width)) = (
        ornaments.anchor(OrnamentKind::ScaleBar),
        ornaments.scale_bar().width(),
    ) else {
        return;
    };

    let rect = anchor.resolve(container, vec2(width, 18.));

    let mut x = rect.left();
    for (n, bar) in ornaments.scale_bar().visible_bars().enumerate() {
        let color = if n % 2 == 0 {
            Color32::from_gray(40)
        } else {
            Color32::WHITE
        };
        painter.rect_filled(
            Rect::from_min_size(pos2(x, rect.bottom() - 4.), vec2(bar.width, 4.)),
            0.,
            color,
        );
        x += bar.width;
    }

    for label in ornaments.scale_bar().visible_labels() {
        painter.text(
            pos2(rect.left() + label.offset, rect.bottom() - 6.),
            Align2::CENTER_BOTTOM,
            &label.text,
            FontId::proportional(10.),
            Color32::from_gray(40),
        );
    }
}

fn compass(painter: &Painter, container: Rect, ornaments: &Ornaments) {
    let Some(anchor) = ornaments.anchor(OrnamentKind::Compass) else {
        return;
    };

    let rect = anchor.resolve(container, vec2(32., 32.));
    painter.circle_filled(rect.center(), 16., Color32::WHITE.gamma_multiply(0.85));

    // The needle points at north, so it turns against the map's bearing.
    let angle = -(ornaments.compass().bearing().to_radians() as f32);
    let needle = egui::Vec2::angled(angle - std::f32::consts::FRAC_PI_2) * 12.;
    painter.line_segment(
        [rect.center(), rect.center() + needle],
        Stroke::new(2., Color32::from_rgb(200, 60, 60)),
    );
    painter.circle_filled(rect.center(), 2., Color32::from_gray(40));
}

fn logo(painter: &Painter, container: Rect, ornaments: &Ornaments) {
    let Some(anchor) = ornaments.anchor(OrnamentKind::Logo) else {
        return;
    };

    let rect = anchor.resolve(container, vec2(72., 22.));
    painter.rect_filled(rect, 4., Color32::WHITE.gamma_multiply(0.85));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "ornaments",
        FontId::proportional(12.),
        Color32::from_gray(40),
    );
}

fn attribution(painter: &Painter, container: Rect, ornaments: &Ornaments) {
    let Some(anchor) = ornaments.anchor(OrnamentKind::Attribution) else {
        return;
    };

    let rect = anchor.resolve(container, vec2(22., 22.));
    painter.circle_filled(rect.center(), 11., Color32::WHITE.gamma_multiply(0.85));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "i",
        FontId::proportional(14.),
        Color32::from_gray(40),
    );
}
