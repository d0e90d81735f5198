use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indoor_temp_models::{
    models::thermal::indoor_temp::{
        IndoorTemperature, InputError, MaterialError, MaterialProfile, OutdoorConditions, Results,
        SimulationConfig, resolve_material,
    },
    support::{astronomy::DayOfYear, comfort::hour_of_day},
};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twine_core::Model;
use uom::si::{
    angle::degree,
    f64::{Angle, TemperatureInterval, ThermodynamicTemperature},
    ratio::percent,
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
    time::hour,
};

#[derive(Parser)]
#[command(name = "indoor-temp")]
#[command(
    about = "Predicts indoor temperature over one day after the air conditioning fails",
    long_about = None
)]
struct Cli {
    /// House material: wood, brick, or concrete
    #[arg(short, long)]
    material: String,

    /// Site latitude in degrees, positive north [default: 35.15]
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Day of year, 1-366 [default: 264]
    #[arg(long)]
    day_of_year: Option<u16>,

    /// Indoor temperature at midnight, in °F [default: 70]
    #[arg(long)]
    initial_temp: Option<f64>,

    /// Solar gain added during daylight, in °F [default: 1.5]
    #[arg(long)]
    solar_gain: Option<f64>,

    /// JSON file with 24 `temperature_f` and 24 `relative_humidity_pct` values
    #[arg(short, long)]
    weather: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
}

/// Hourly outdoor data as read from a weather file.
#[derive(Debug, Deserialize)]
struct WeatherFile {
    temperature_f: Vec<f64>,
    relative_humidity_pct: Vec<f64>,
}

impl Cli {
    fn material(&self) -> Result<MaterialProfile, MaterialError> {
        resolve_material(&self.material)
    }

    fn config(&self) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::default();
        if let Some(latitude) = self.latitude {
            config.latitude = Angle::new::<degree>(latitude);
        }
        if let Some(day) = self.day_of_year {
            config.day_of_year = DayOfYear::new(day)?;
        }
        if let Some(initial) = self.initial_temp {
            config.initial_indoor_temperature =
                ThermodynamicTemperature::new::<degree_fahrenheit>(initial);
        }
        if let Some(gain) = self.solar_gain {
            config.solar_gain_rate = TemperatureInterval::new::<delta_fahrenheit>(gain);
        }
        Ok(config)
    }

    fn outdoor(&self) -> Result<OutdoorConditions> {
        let Some(path) = &self.weather else {
            return Ok(OutdoorConditions::memphis_heat_wave());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read weather file {}", path.display()))?;
        let weather: WeatherFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse weather file {}", path.display()))?;

        weather
            .into_outdoor()
            .with_context(|| format!("invalid weather file {}", path.display()))
    }
}

impl WeatherFile {
    fn into_outdoor(self) -> Result<OutdoorConditions, InputError> {
        OutdoorConditions::from_fahrenheit_and_percent(
            &self.temperature_f,
            &self.relative_humidity_pct,
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let material = cli.material()?;
    let config = cli.config()?;
    let outdoor = cli.outdoor()?;

    info!(
        material = material.name(),
        latitude = config.latitude.get::<degree>(),
        day_of_year = config.day_of_year.get(),
        "running simulation"
    );

    let model = IndoorTemperature::new(config, material);
    let results = model.call(&outdoor).context("simulation failed")?;

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Table => write_table(&mut out, model.material(), &outdoor, &results)?,
        Format::Csv => write_csv(&mut out, &outdoor, &results)?,
    }
    out.flush()?;

    Ok(())
}

fn write_table(
    out: &mut impl Write,
    material: &MaterialProfile,
    outdoor: &OutdoorConditions,
    results: &Results,
) -> io::Result<()> {
    let daylight = &results.daylight;

    writeln!(
        out,
        "Outdoor mean: {:.2}°F, amplitude: {:.2}°F",
        outdoor.mean_temperature().get::<degree_fahrenheit>(),
        outdoor.amplitude().get::<delta_fahrenheit>(),
    )?;
    writeln!(
        out,
        "Sunrise: {:.2} h ({}), sunset: {:.2} h ({}), daylight: {:.2} h",
        daylight.sunrise().get::<hour>(),
        daylight.sunrise_clock(),
        daylight.sunset().get::<hour>(),
        daylight.sunset_clock(),
        daylight.length().get::<hour>(),
    )?;
    writeln!(
        out,
        "Material: {} (tau = {} hours)",
        material.name(),
        material.time_constant().get::<hour>(),
    )?;
    writeln!(out)?;
    writeln!(out, "hour  outdoor°F  rh%  effective°F  indoor°F")?;

    for (index, record) in outdoor.records().iter().enumerate() {
        writeln!(
            out,
            "{index:>4}  {:>9.1}  {:>3.0}  {:>11.2}  {:>8.2}",
            record.temperature().get::<degree_fahrenheit>(),
            record.relative_humidity().into_inner().get::<percent>(),
            results.effective[index].get::<degree_fahrenheit>(),
            results.indoor[index].get::<degree_fahrenheit>(),
        )?;
    }

    let (peak_hour, peak) = results.indoor.peak();
    writeln!(out)?;
    writeln!(
        out,
        "Peak indoor temperature: {:.2}°F at hour {peak_hour}",
        peak.get::<degree_fahrenheit>()
    )?;
    writeln!(
        out,
        "Indoor temperature at end of day (hour 23): {:.2}°F",
        results.indoor.last().get::<degree_fahrenheit>()
    )
}

fn write_csv(
    out: &mut impl Write,
    outdoor: &OutdoorConditions,
    results: &Results,
) -> io::Result<()> {
    writeln!(out, "hour,outdoor_f,relative_humidity_pct,effective_f,indoor_f,daylight")?;
    for (index, record) in outdoor.records().iter().enumerate() {
        let daylight = results.daylight.contains(hour_of_day(index));
        writeln!(
            out,
            "{index},{:.2},{:.1},{:.2},{:.2},{daylight}",
            record.temperature().get::<degree_fahrenheit>(),
            record.relative_humidity().into_inner().get::<percent>(),
            results.effective[index].get::<degree_fahrenheit>(),
            results.indoor[index].get::<degree_fahrenheit>(),
        )?;
    }
    Ok(())
}
