use eframe::egui;
use relviz::scenario::Scenario;

fn description(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Perihelion => {
            "A Newtonian ellipse next to one whose perihelion slowly advances. \
             Precession is exaggerated so it is visible within seconds."
        }
        Scenario::Gps => {
            "How planet size, mass and orbit radius change how fast a satellite \
             clock runs compared to one on the ground."
        }
    }
}

/// Scenario picker. Returns the scenario the user chose this frame.
pub fn render_main_menu(ui: &mut egui::Ui) -> Option<Scenario> {
    let mut chosen = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.heading(egui::RichText::new("General relativity in motion").size(32.0));
        ui.add_space(24.0);

        for (i, scenario) in Scenario::ALL.into_iter().enumerate() {
            let button = egui::Button::new(egui::RichText::new(scenario.title()).size(20.0))
                .min_size(egui::vec2(320.0, 48.0));
            if ui.add(button).clicked() {
                chosen = Some(scenario);
            }
            ui.label(egui::RichText::new(description(scenario)).small().weak());
            ui.label(egui::RichText::new(format!("Key {}", i + 1)).small().weak());
            ui.add_space(16.0);
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Esc returns here from a scenario").italics().weak());
    });

    chosen
}
