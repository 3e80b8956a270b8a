use std::process;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use tracing::error;

use speedtest::cli::{self, Options};
use speedtest::io::read_samples;
use speedtest::{estimate, simulate, throttle, Coefficients, RunSummary, SimConfig, Step};

fn main() -> eframe::Result {
    cli::init_logging();

    let options = match Options::parse() {
        Ok(options) => options,
        Err(usage) => {
            println!("{}", usage);
            return Ok(());
        }
    };

    let config = SimConfig::default();
    let coefficients = match read_samples(&options.log_path)
        .and_then(|s| estimate(config.thrust, s.x1, s.x2))
    {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to fit car model");
            eprintln!("speedtest-viz: {}", e);
            process::exit(1);
        }
    };
    let steps: Vec<Step> = simulate(config.steps, coefficients).collect();
    let summary = RunSummary::from_steps(&steps);

    let app = RunViz { steps, coefficients, summary };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Race Speed Simulation", options, Box::new(|_| Ok(Box::new(app))))
}

struct RunViz {
    steps: Vec<Step>,
    coefficients: Coefficients,
    summary: RunSummary,
}

impl eframe::App for RunViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Car model");
            ui.label(format!(
                "Power: {:.5}  |  Drag: {:.5}  |  Top speed: {:.3}  |  Peak: {:.3}  |  Distance: {:.1}",
                self.coefficients.power,
                self.coefficients.drag,
                self.coefficients.top_speed(),
                self.summary.peak_velocity,
                self.summary.final_position,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Velocity");
                    let points: PlotPoints = self.steps.iter()
                        .map(|s| [s.index as f64, s.velocity])
                        .collect();
                    Plot::new("velocity")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Step")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Velocity", points));
                        });
                });

                ui.vertical(|ui| {
                    ui.label("Throttle");
                    let points: PlotPoints = self.steps.iter()
                        .map(|s| [s.index as f64, throttle(s.index)])
                        .collect();
                    Plot::new("throttle")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Step")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Throttle", points));
                        });
                });
            });

            ui.label("Position");
            let points: PlotPoints = self.steps.iter()
                .map(|s| [s.index as f64, s.position])
                .collect();
            Plot::new("position")
                .height(half_h)
                .x_axis_label("Step")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Position", points));
                });
        });
    }
}
