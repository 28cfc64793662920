//! End-to-end runs of the fixture runner against in-memory output.

use std::io::{self, Write};

use gildedrose_fixture::{Config, OutputFormat, run};

/// Accepts a fixed number of bytes, then behaves like a closed pipe.
struct ClosesAfter {
    remaining: usize,
}

impl Write for ClosesAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn render(config: &Config) -> String {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn classic_inventory_over_two_days() {
    let text = render(&Config::default());

    let expected = "\
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mana Cake, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 4

-------- day 2 --------
name, sellIn, quality
+5 Dexterity Vest, 8, 18
Aged Brie, 0, 2
Elixir of the Mongoose, 3, 5
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 13, 22
Backstage passes to a TAFKAL80ETC concert, 8, 50
Backstage passes to a TAFKAL80ETC concert, 3, 50
Conjured Mana Cake, 1, 2

";
    assert_eq!(text, expected);
}

#[test]
fn zero_days_prints_only_the_starting_state() {
    let config = Config {
        days: 0,
        ..Config::default()
    };
    let text = render(&config);

    assert_eq!(text.matches("-------- day").count(), 1);
    assert!(text.starts_with("-------- day 0 --------\n"));
}

#[test]
fn json_report_has_one_snapshot_per_day() {
    let config = Config {
        days: 5,
        format: OutputFormat::Json,
        ..Config::default()
    };
    let value: serde_json::Value = serde_json::from_str(&render(&config)).unwrap();

    let days = value.as_array().unwrap();
    assert_eq!(days.len(), 6);
    assert_eq!(days[5]["day"], 5);

    // Backstage pass (10 days, quality 49) is capped at 50 every day.
    assert_eq!(days[5]["items"][6]["sellIn"], 5);
    assert_eq!(days[5]["items"][6]["quality"], 50);
}

#[test]
fn missing_fixture_file_fails_before_writing() {
    let config = Config {
        fixture: Some("no/such/fixture.json".into()),
        ..Config::default()
    };
    let mut out = Vec::new();

    assert!(run(&config, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn long_simulation_streams_into_a_sink() {
    for format in [OutputFormat::Text, OutputFormat::Json] {
        let config = Config {
            days: 20_000,
            format,
            ..Config::default()
        };
        run(&config, &mut io::sink()).unwrap();
    }
}

#[test]
fn maximum_day_count_stops_at_the_first_write_error() {
    for format in [OutputFormat::Text, OutputFormat::Json] {
        let config = Config {
            days: u32::MAX,
            format,
            ..Config::default()
        };
        let mut out = ClosesAfter { remaining: 4096 };

        let err = run(&config, &mut out).unwrap_err();
        assert!(err.to_string().contains("failed to write report"));
        assert_eq!(out.remaining, 0);
    }
}
