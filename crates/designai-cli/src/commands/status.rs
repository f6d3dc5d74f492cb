use colored::Colorize;

use designai_application::WorkspaceController;
use designai_core::clock::display_time;

pub fn run(controller: &WorkspaceController) {
    let state = controller.state();

    println!("{}", "=== DesignAI workspace ===".bright_magenta().bold());
    println!("{:<10} {}", "View:".bright_black(), state.view);
    println!(
        "{:<10} {} {}",
        "Profile:".bright_black(),
        format!("[{}]", controller.avatar_initial()).bright_cyan(),
        controller.profile_label()
    );
    println!("{:<10} {}", "Credits:".bright_black(), state.credits);
    println!("{:<10} {}", "Records:".bright_black(), state.records.len());

    match state.latest_record() {
        Some(record) => println!(
            "{:<10} {} ({}) - {} - {} - {}",
            "Latest:".bright_black(),
            record.template,
            record.tone,
            record.complexity,
            record.device,
            display_time(record.created_at)
        ),
        None => println!("{:<10} {}", "Latest:".bright_black(), "none yet".bright_black()),
    }
}
