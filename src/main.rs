use app::{
    AnalyseCommand, AppHelper, AuthorsCommand, Command, ProblemsCommand, RankCommand, SolveCommand,
};

mod app;

const AUTHORS: &str = "The serab developers";

fn main() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        AUTHORS,
        "Serab, a serialisability-based abstract argumentation reasoner.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AnalyseCommand::new()),
        Box::new(AuthorsCommand::new(app_name, app_version, AUTHORS)),
        Box::new(ProblemsCommand::new()),
        Box::new(RankCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app.launch_app();
}
