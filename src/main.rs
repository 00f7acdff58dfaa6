use macroquad::prelude::*;
use heat_life::{
    Simulation,
    config::{self, COLS, ROWS, Settings},
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Heat Life".to_owned(),
        window_width: config::WIDTH as i32,
        window_height: config::HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::from_env();
    log::info!("starting {COLS}x{ROWS} grid, seed {}", settings.seed);

    let mut sim = Simulation::new(COLS, ROWS, settings.seed);

    loop {
        sim = input::process_keyboard_input(sim);

        sim = sim.tick(get_frame_time());

        sim.frame.present();
        if sim.show_status {
            rendering::draw_status(sim.generation, sim.population(), sim.is_running);
        }

        next_frame().await;
    }
}
