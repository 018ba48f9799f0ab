use packcfg_common::NormalizedProfile;

/// The two informational lines a build emits after composition: which profile
/// was selected and where assets will be served from. Deliberately a separate
/// step so `compose` stays pure.
pub fn report_profile(profile: &NormalizedProfile) {
  log::info!("using {} profile", profile.mode);
  log::info!("public path resolved to \"{}\"", profile.public_path);
}
