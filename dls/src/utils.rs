pub fn initialize_debug_from_args(matches: &clap::ArgMatches) {
    dirlist::utils::set_debug(matches.is_present("debug"));
}
