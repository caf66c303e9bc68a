//! Interactive session: filters → load → four reports → raw paging → restart

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing::{debug, info};

use crate::core::{duration_stats, station_stats, time_stats, user_stats};
use crate::data::{City, CityFiles, Filters, TripTable, load_trips};
use crate::error::AppError;
use crate::output::{
    DURATION_HEADING, STATION_HEADING, TIME_HEADING, USER_HEADING, separator, write_duration_stats,
    write_footer, write_heading, write_raw_page, write_station_stats, write_time_stats,
    write_user_stats,
};
use crate::session::prompt::{Prompter, is_yes};

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const MONTH_PROMPT: &str =
    "Please choose the month to analyze.\nHint: Must be \"all\" or between january to june: ";
const DAY_PROMPT: &str =
    "Please choose the day of the week to analyze.\nHint: Must be \"all\" or between monday to sunday: ";
const FIRST_PAGE_PROMPT: &str =
    "Would you like to see the 5 rows of each city raw data? Enter 'Yes' or 'No': ";
const NEXT_PAGE_PROMPT: &str = "Would you like to see more data? Enter 'Yes' or 'No': ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

fn city_prompt() -> String {
    let keys: Vec<&str> = City::ALL.iter().map(|c| c.key()).collect();
    let hint = match keys.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        _ => keys.concat(),
    };
    format!("Please choose the name of the city to analyze.\nHint: Must be {hint}: ")
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SessionOptions {
    pub(crate) use_color: bool,
}

pub(crate) struct Session<'a, R, W> {
    files: &'a CityFiles,
    prompter: Prompter<R, W>,
    opts: SessionOptions,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(files: &'a CityFiles, input: R, output: W, opts: SessionOptions) -> Self {
        Session {
            files,
            prompter: Prompter::new(input, output),
            opts,
        }
    }

    /// Run until the user declines to restart or input ends.
    /// Load failures abort the session.
    pub(crate) fn run(&mut self) -> Result<(), AppError> {
        let mut iteration = 0u32;
        loop {
            iteration += 1;
            let Some(filters) = self.get_filters()? else {
                debug!("input closed while collecting filters");
                return Ok(());
            };
            info!(
                iteration,
                city = %filters.city,
                month = %filters.month,
                day = %filters.day,
                "starting analysis"
            );

            // Fresh load every iteration; the previous table is dropped here
            let table = load_trips(self.files, &filters)?;
            self.show_statistics(&table)?;
            self.page_raw_data(&table)?;

            match self.prompter.ask(RESTART_PROMPT)? {
                Some(answer) if is_yes(&answer) => continue,
                _ => return Ok(()),
            }
        }
    }

    /// City is re-asked until it names a supported city; month and day are taken as typed
    fn get_filters(&mut self) -> io::Result<Option<Filters>> {
        writeln!(self.prompter.out(), "{GREETING}")?;

        let prompt = city_prompt();
        let city = loop {
            let Some(answer) = self.prompter.ask(&prompt)? else {
                return Ok(None);
            };
            match City::lookup(&answer) {
                Some(city) => break city,
                None => debug!(input = %answer, "unrecognised city"),
            }
        };

        let Some(month) = self.prompter.ask(MONTH_PROMPT)? else {
            return Ok(None);
        };
        let Some(day) = self.prompter.ask(DAY_PROMPT)? else {
            return Ok(None);
        };

        writeln!(self.prompter.out(), "{}", separator())?;
        Ok(Some(Filters::new(
            city,
            month.trim().to_lowercase(),
            day.trim().to_lowercase(),
        )))
    }

    /// Time → stations → duration → users, each in its own timed block
    fn show_statistics(&mut self, table: &TripTable) -> io::Result<()> {
        self.timed_block(TIME_HEADING, |out| write_time_stats(out, &time_stats(table)))?;
        self.timed_block(STATION_HEADING, |out| {
            write_station_stats(out, &station_stats(table))
        })?;
        self.timed_block(DURATION_HEADING, |out| {
            write_duration_stats(out, &duration_stats(table))
        })?;
        self.timed_block(USER_HEADING, |out| {
            write_user_stats(out, &user_stats(table), table.city())
        })
    }

    fn timed_block<F>(&mut self, heading: &str, body: F) -> io::Result<()>
    where
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        let use_color = self.opts.use_color;
        let out = self.prompter.out();
        let started = Instant::now();
        write_heading(out, heading, use_color)?;
        body(out)?;
        write_footer(out, started.elapsed(), use_color)
    }

    /// Show consecutive pages while the answer is "yes"; no bound against table length
    fn page_raw_data(&mut self, table: &TripTable) -> io::Result<()> {
        let mut prompt = FIRST_PAGE_PROMPT;
        let mut page = 0usize;
        while let Some(answer) = self.prompter.ask(prompt)? {
            if !is_yes(&answer) {
                break;
            }
            let rows = table.page(page);
            write_raw_page(self.prompter.out(), rows, table.schema(), self.opts.use_color)?;
            page += 1;
            prompt = NEXT_PAGE_PROMPT;
        }
        debug!(pages = page, "raw data paging finished");
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
