use std::process::ExitCode;

fn main() -> ExitCode {
  combine_rating_lib::run()
}
