use packcfg::{base_profile, compose, production_profile, public_path_from_env, report_profile};

fn main() {
  env_logger::init();

  // The one environment read happens here, not inside the composer.
  let public_path = public_path_from_env();

  match compose(base_profile, production_profile(public_path)) {
    Ok(profile) => {
      report_profile(&profile);
      if let Ok(json) = profile.to_json() {
        println!("{json}");
      }
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("Error: {error}");
      }
    }
  }
}
