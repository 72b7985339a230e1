use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use jataka_vedic_base::{
    ALL_KOOTAS, Amsha, DAYS_PER_YEAR, DashaPeriod, Graha, MAX_GUNA_POINTS, SHODASHAVARGA,
    amsha_position, analyze_chart, divisional_chart, guna_milan, nakshatra_from_longitude,
    rashi_from_longitude, vargottama_grahas, yogini_antardashas, yogini_mahadashas,
    yogini_snapshot,
};

mod chart_file;

use chart_file::{load_chart, load_condition_config};

#[derive(Parser)]
#[command(name = "jataka", about = "Vedic divisional chart and condition CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Position of a longitude in one divisional chart
    Amsha {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Division count (1, 2, 3, 4, 7, 9, 10, 12, 16, 20, 24, 27, 30, 40, 45, 60)
        #[arg(long)]
        division: u16,
    },
    /// Divisional charts of a chart file (all sixteen unless --division is given)
    Varga {
        /// Chart file (JSON)
        #[arg(long)]
        chart: PathBuf,
        #[arg(long)]
        division: Option<u16>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Planetary conditions (motion, combustion, speed, war) of a chart file
    Conditions {
        /// Chart file (JSON)
        #[arg(long)]
        chart: PathBuf,
        /// Condition config (TOML); missing keys use defaults
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Ashtakoota compatibility from two Moon longitudes
    Milan {
        /// Bride's sidereal Moon longitude
        #[arg(long, allow_hyphen_values = true)]
        bride: f64,
        /// Groom's sidereal Moon longitude
        #[arg(long, allow_hyphen_values = true)]
        groom: f64,
        #[arg(long)]
        json: bool,
    },
    /// Yogini dasha periods, or the running periods at --at
    Yogini {
        /// Sidereal Moon longitude at birth
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Birth Julian Day (UT)
        #[arg(long)]
        birth_jd: f64,
        /// Query Julian Day (UT)
        #[arg(long)]
        at: Option<f64>,
        /// Number of 36-year cycles to list
        #[arg(long, default_value = "1")]
        cycles: u8,
        /// Also list antardashas
        #[arg(long)]
        antardashas: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_period(indent: &str, p: &DashaPeriod) {
    println!(
        "{indent}{:<9} ({:<7}) JD {:.4} - {:.4} ({:.2} y)",
        p.yogini.name(),
        p.yogini.lord().name(),
        p.start_jd,
        p.end_jd,
        p.duration_days() / DAYS_PER_YEAR
    );
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Amsha { lon, division } => {
            let amsha = Amsha::from_code(division)?;
            let pos = amsha_position(lon, amsha);
            let info = rashi_from_longitude(pos.longitude());
            println!(
                "{} ({}): {} {:.4} deg (part {}, longitude {:.4})",
                amsha.name(),
                amsha.sanskrit_name(),
                info.rashi.name(),
                pos.degrees_in_rashi,
                pos.part_index + 1,
                pos.longitude()
            );
        }

        Commands::Varga {
            chart,
            division,
            json,
        } => {
            let natal = load_chart(&chart)?;
            let amshas = match division {
                Some(d) => vec![Amsha::from_code(d)?],
                None => SHODASHAVARGA.to_vec(),
            };
            let charts: Vec<_> = amshas.iter().map(|&a| divisional_chart(&natal, a)).collect();
            if json {
                return print_json(&charts);
            }
            for d in &charts {
                println!(
                    "{} ({}) - ascendant {}",
                    d.amsha.name(),
                    d.amsha.sanskrit_name(),
                    rashi_from_longitude(d.ascendant_deg).rashi.name()
                );
                for p in &d.positions {
                    println!(
                        "  {:<8} {:<10} {:>8.4} deg  house {:>2}",
                        p.graha().name(),
                        rashi_from_longitude(p.longitude_deg()).rashi.name(),
                        p.degrees_in_rashi(),
                        p.house()
                    );
                }
            }
            let vargottama: Vec<&str> = vargottama_grahas(&natal)
                .into_iter()
                .map(Graha::name)
                .collect();
            if !vargottama.is_empty() {
                println!("Vargottama: {}", vargottama.join(", "));
            }
        }

        Commands::Conditions {
            chart,
            config,
            json,
        } => {
            let natal = load_chart(&chart)?;
            let cfg = load_condition_config(config.as_deref())?;
            let out = analyze_chart(&natal, &cfg);
            if json {
                return print_json(&out);
            }
            for c in out.conditions.values() {
                let sun = c
                    .sun_distance_deg
                    .map_or_else(|| "-".to_string(), |d| format!("{d:.3}"));
                println!(
                    "{:<8} {:<20} {:<12} {:<10} sun {:>8}  strength {:.3}",
                    c.graha.name(),
                    format!("{:?}", c.motion),
                    format!("{:?}", c.combustion),
                    format!("{:?}", c.speed),
                    sun,
                    c.strength_factor
                );
            }
            for w in &out.wars {
                println!(
                    "War: {} vs {} ({:.3} deg) - {} wins by {:?}",
                    w.grahas.0.name(),
                    w.grahas.1.name(),
                    w.separation_deg,
                    w.winner.name(),
                    w.rule
                );
            }
            println!("Malefic pressure: {:.3}", out.malefic_pressure);
        }

        Commands::Milan { bride, groom, json } => {
            let result = guna_milan(bride, groom)?;
            if json {
                return print_json(&result);
            }
            println!(
                "Bride: {} / {} pada {}",
                result.bride.rashi.name(),
                result.bride.nakshatra.name(),
                result.bride.pada
            );
            println!(
                "Groom: {} / {} pada {}",
                result.groom.rashi.name(),
                result.groom.nakshatra.name(),
                result.groom.pada
            );
            for k in ALL_KOOTAS {
                println!(
                    "  {:<13} {:>4.1} / {:.0}",
                    k.name(),
                    result.score(k),
                    k.max_points()
                );
            }
            println!("Total: {:.1} / {MAX_GUNA_POINTS:.0}", result.total_points);
            if result.nadi_dosha {
                println!("Nadi dosha");
            }
            if result.bhakoot_dosha {
                println!("Bhakoot dosha");
            }
        }

        Commands::Yogini {
            moon,
            birth_jd,
            at,
            cycles,
            antardashas,
        } => {
            if !moon.is_finite() || !birth_jd.is_finite() {
                bail!("moon and birth-jd must be finite");
            }
            if let Some(jd) = at {
                let snap = yogini_snapshot(birth_jd, moon, jd)
                    .with_context(|| format!("no yogini period at JD {jd}"))?;
                print_period("Mahadasha  ", &snap.mahadasha);
                print_period("Antardasha ", &snap.antardasha);
                return Ok(());
            }
            let periods = yogini_mahadashas(birth_jd, moon, cycles.max(1));
            debug!("listing {} mahadashas", periods.len());
            for p in &periods {
                print_period("", p);
                if antardashas {
                    for sub in yogini_antardashas(p) {
                        print_period("    ", &sub);
                    }
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Cli::parse())
}
