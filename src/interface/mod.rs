pub mod profile_file;
pub mod prompts;
pub mod render;

pub use profile_file::load_profile;
pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_goal, prompt_sex, prompt_weight,
    prompt_yes_no,
};
pub use render::{display_json, display_result, format_meal, format_report};
