use comfy_table::Table;
use soilwatch_core::normalized_reading::NormalizedReading;

pub fn readings_table(readings: &[NormalizedReading]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Observed at",
        "Raw",
        "Moisture",
        "Level",
        "Temperature",
    ]);

    for reading in readings {
        table.add_row(vec![
            reading.observed_at.strftime("%Y-%m-%d %H:%M:%S").to_string(),
            reading.raw_moisture.to_string(),
            format!("{}%", reading.moisture_percent),
            reading.level.to_string(),
            reading
                .temperature
                .map(|temperature| format!("{temperature:.1} °C"))
                .unwrap_or_else(|| String::from("--")),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use soilwatch_core::{calibration::Calibration, reading::Reading};

    use super::*;

    #[test]
    fn test_readings_table() {
        let reading = Reading {
            raw_moisture: 741.5,
            raw_temperature: None,
            observed_at: "2025-06-10T08:00:00Z".parse().unwrap(),
        };
        let normalized = Calibration::CAPACITIVE.apply(&reading).unwrap();

        let rendered = readings_table(&[normalized]).to_string();

        assert!(rendered.contains("2025-06-10 08:00:00"));
        assert!(rendered.contains("50%"));
        assert!(rendered.contains("warning"));
        assert!(rendered.contains("--"));
    }
}
