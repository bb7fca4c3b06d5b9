const BANNER: &str = r"
  __  __ ___ _____ ___ ___  ___   ___ _  _  _____      _____ ___
 |  \/  | __|_   _| __/ _ \| _ \ / __| || |/ _ \ \    / / __| _ \
 | |\/| | _|  | | | _| (_) |   / \__ \ __ | (_) \ \/\/ /| _||   /
 |_|  |_|___| |_| |___\___/|_|_\ |___/_||_|\___/ \_/\_/ |___|_|_\
";

/// Printed to stderr, ahead of any profile output
pub fn print_banner() {
    eprintln!("{}", BANNER);
}
