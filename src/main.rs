use minecraft_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Prueba sobre Minecraft",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
