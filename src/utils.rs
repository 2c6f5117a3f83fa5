use std::str::FromStr;

/// Parse `"a,b"` into a pair. Intended for use as a `clap` value parser.
pub fn parse_pair<T: FromStr>(s: &str) -> Result<(T, T), String>
where
    <T as FromStr>::Err: std::fmt::Display,
{
    let v = s.split(',').map(str::trim).collect::<Vec<_>>();
    if v.len() != 2 {
        return Err(format!("expected two comma-separated values, got '{s}'"))
    }
    let parse = |x: &str| x.parse::<T>().map_err(|e| format!("'{x}': {e}"));
    Ok((parse(v[0])?, parse(v[1])?))
}

/// Group numeric digits to facilitate reading long numbers
pub fn group_digits<F: std::fmt::Display>(n: F) -> String {
    use numsep::{separate, Locale};
    separate(n, Locale::English)
}


pub mod timing {

    use super::group_digits;
    use std::time::Instant;
    use std::io::Write;

    pub struct Progress {
        previous: Instant,
    }

    impl Progress {

        #[allow(clippy::new_without_default)]
        pub fn new() -> Self { Self { previous: Instant::now() } }

        /// Print message, append ellipsis, flush stdout, stay on same line, start timer.
        pub fn start(&mut self, message: &str) {
            print!("{message} ... ");
            // Only affects how soon the message appears
            let _ = std::io::stdout().flush();
            self.start_timer();
        }

        // Print time elapsed since last start or done
        pub fn done(&mut self) {
            println!("{} ms", group_digits(self.previous.elapsed().as_millis()));
            self.start_timer();
        }

        // Print message followed by time elapsed since last start or done
        pub fn done_with_message(&mut self, message: &str) {
            println!("{message}: {} ms",
                     group_digits(self.previous.elapsed().as_millis()));
            self.start_timer();
        }

        /// Time since the last start or report
        pub fn elapsed(&self) -> std::time::Duration { self.previous.elapsed() }

        fn start_timer(&mut self) { self.previous = Instant::now() }
    }
}
