//! Interactive fleet console
//!
//! A two-level menu: fleets at the top, carriers and cargo inside a
//! selected fleet. Generic over the reader and writer so sessions can be
//! scripted in tests; the binary wires it to stdin and stdout.

use std::io::{BufRead, Write};

use stowage_app::FleetDirectory;
use stowage_domain::{Carrier, FleetRegistry};
use stowage_types::{CargoItem, Error, OutputFormat, Result};

use crate::output;

/// One interactive console session over a fleet directory
pub struct Session {
    directory: FleetDirectory,
    format: OutputFormat,
    verbose: bool,
    banner: bool,
}

impl Session {
    pub fn new(format: OutputFormat, verbose: bool, banner: bool) -> Self {
        Self {
            directory: FleetDirectory::new(),
            format,
            verbose,
            banner,
        }
    }

    /// Fleets and carriers accumulated by this session
    pub fn directory(&self) -> &FleetDirectory {
        &self.directory
    }

    /// Run the console until quit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        if self.banner {
            writeln!(out, "Stowage Fleet Console")?;
            writeln!(out, "=====================")?;
        }

        loop {
            writeln!(out)?;
            writeln!(out, "1. Add a fleet")?;
            writeln!(out, "2. List fleets")?;
            writeln!(out, "3. Manage a fleet")?;
            writeln!(out, "4. Quit")?;

            let choice = match prompt(input, out, "Choice: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.add_fleet(input, out)?,
                "2" => self.list_fleets(out)?,
                "3" => self.manage_fleet(input, out)?,
                "4" => break,
                "" => continue,
                other => writeln!(out, "Unknown choice: {}", other)?,
            }
        }

        writeln!(out, "Goodbye!")?;
        Ok(())
    }

    fn add_fleet<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let name = match prompt(input, out, "Fleet name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };
        match self.directory.create_fleet(&name) {
            Ok(fleet) => writeln!(out, "Fleet added: {}", fleet.name())?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        Ok(())
    }

    fn list_fleets<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.directory.fleet_count() == 0 {
            writeln!(out, "No fleets registered.")?;
            return Ok(());
        }
        for name in self.directory.fleet_names() {
            writeln!(out, "- {}", name)?;
        }
        Ok(())
    }

    fn manage_fleet<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let fleet_name = loop {
            let entered = match prompt(input, out, "Fleet name: ")? {
                Some(entered) => entered,
                None => return Ok(()),
            };
            match self.directory.fleet(&entered) {
                Some(fleet) => break fleet.name().to_string(),
                None => writeln!(out, "No such fleet: {}", entered)?,
            }
        };

        loop {
            writeln!(out)?;
            writeln!(out, "Managing fleet: {}", fleet_name)?;
            writeln!(out, "1. Add a carrier")?;
            writeln!(out, "2. Load an item")?;
            writeln!(out, "3. Unload an item")?;
            writeln!(out, "4. Show loaded items")?;
            writeln!(out, "5. Show carrier details")?;
            writeln!(out, "6. Remove a carrier")?;
            writeln!(out, "7. Back")?;

            let choice = match prompt(input, out, "Choice: ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            match choice.as_str() {
                "1" => self.add_carrier(input, out, &fleet_name)?,
                "2" => self.load_item(input, out, &fleet_name)?,
                "3" => self.unload_item(input, out, &fleet_name)?,
                "4" => self.show_items(input, out, &fleet_name)?,
                "5" => self.show_details(input, out, &fleet_name)?,
                "6" => self.remove_carrier(input, out, &fleet_name)?,
                "7" => return Ok(()),
                "" => continue,
                other => writeln!(out, "Unknown choice: {}", other)?,
            }
        }
    }

    fn add_carrier<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        fleet_name: &str,
    ) -> Result<()> {
        loop {
            let id = match prompt(input, out, "Carrier id: ")? {
                Some(id) => id,
                None => return Ok(()),
            };
            let max_weight = match prompt_number::<u32, R, W>(input, out, "Max weight (kg): ")? {
                Some(max_weight) => max_weight,
                None => return Ok(()),
            };
            let max_volume = match prompt_number::<f64, R, W>(input, out, "Max volume (m³): ")? {
                Some(max_volume) => max_volume,
                None => return Ok(()),
            };

            let fleet = self.fleet_mut(fleet_name)?;
            let carrier = match Carrier::new(&id, max_weight, max_volume, fleet) {
                Ok(carrier) => carrier,
                Err(e) => {
                    writeln!(out, "Error: {}", e)?;
                    continue;
                }
            };
            match fleet.add_carrier(carrier) {
                Ok(()) => {
                    writeln!(out, "Carrier added: {}", id)?;
                    return Ok(());
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
    }

    fn load_item<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        fleet_name: &str,
    ) -> Result<()> {
        let verbose = self.verbose;
        loop {
            let carrier_id = match prompt(input, out, "Carrier id: ")? {
                Some(carrier_id) => carrier_id,
                None => return Ok(()),
            };
            let kind = match prompt(input, out, "Item kind (1 bulk, 2 pallet, 3 custom): ")? {
                Some(kind) => kind,
                None => return Ok(()),
            };
            let id = match prompt(input, out, "Item id: ")? {
                Some(id) => id,
                None => return Ok(()),
            };
            let weight = match prompt_number::<u32, R, W>(input, out, "Weight (kg): ")? {
                Some(weight) => weight,
                None => return Ok(()),
            };
            let volume = match prompt_number::<f64, R, W>(input, out, "Volume (m³): ")? {
                Some(volume) => volume,
                None => return Ok(()),
            };

            let item = match kind.as_str() {
                "1" => CargoItem::bulk(&id, weight, volume),
                "2" => CargoItem::pallet(&id, weight, volume),
                "3" => CargoItem::ad_hoc(&id, weight, volume),
                other => {
                    writeln!(out, "Unknown item kind: {}", other)?;
                    continue;
                }
            };
            let item = match item {
                Ok(item) => item,
                Err(e) => {
                    writeln!(out, "Error: {}", e)?;
                    continue;
                }
            };

            let fleet = self.fleet_mut(fleet_name)?;
            match fleet.load_item(&carrier_id, item) {
                Ok(()) => {
                    writeln!(out, "Item loaded.")?;
                    if verbose {
                        if let Some(carrier) = fleet.carrier(&carrier_id) {
                            writeln!(
                                out,
                                "Now at {} kg / {:.2} m³",
                                carrier.current_weight(),
                                carrier.current_volume()
                            )?;
                        }
                    }
                    return Ok(());
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
    }

    fn unload_item<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        fleet_name: &str,
    ) -> Result<()> {
        loop {
            let carrier_id = match prompt(input, out, "Carrier id: ")? {
                Some(carrier_id) => carrier_id,
                None => return Ok(()),
            };
            let item_id = match prompt(input, out, "Item id: ")? {
                Some(item_id) => item_id,
                None => return Ok(()),
            };

            // Unload-by-id: a throwaway bulk probe matches any bulk item
            // carrying this id
            let probe = match CargoItem::bulk(&item_id, 1, 0.1) {
                Ok(probe) => probe,
                Err(e) => {
                    writeln!(out, "Error: {}", e)?;
                    continue;
                }
            };

            let fleet = self.fleet_mut(fleet_name)?;
            match fleet.unload_item(&carrier_id, &probe) {
                Ok(removed) => {
                    writeln!(out, "Item unloaded: {}", removed)?;
                    return Ok(());
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
    }

    fn show_items<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        fleet_name: &str,
    ) -> Result<()> {
        let carrier_id = match prompt(input, out, "Carrier id: ")? {
            Some(carrier_id) => carrier_id,
            None => return Ok(()),
        };
        let fleet = self.fleet(fleet_name)?;
        match fleet.carrier(&carrier_id) {
            Some(carrier) => {
                let items = carrier.items();
                if items.is_empty() {
                    writeln!(out, "No items on board.")?;
                }
                for item in items {
                    writeln!(out, "{}", item)?;
                }
            }
            None => writeln!(out, "Carrier not found: {}", carrier_id)?,
        }
        Ok(())
    }

    fn show_details<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        fleet_name: &str,
    ) -> Result<()> {
        let carrier_id = match prompt(input, out, "Carrier id: ")? {
            Some(carrier_id) => carrier_id,
            None => return Ok(()),
        };
        let format = self.format;
        let fleet = self.fleet(fleet_name)?;
        match fleet.carrier(&carrier_id) {
            Some(carrier) => output::write_carrier_details(out, format, carrier)?,
            None => writeln!(out, "Carrier not found: {}", carrier_id)?,
        }
        Ok(())
    }

    fn remove_carrier<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        fleet_name: &str,
    ) -> Result<()> {
        loop {
            let carrier_id = match prompt(input, out, "Carrier id: ")? {
                Some(carrier_id) => carrier_id,
                None => return Ok(()),
            };
            let fleet = self.fleet_mut(fleet_name)?;
            match fleet.remove_carrier(&carrier_id) {
                Ok(removed) => {
                    writeln!(out, "Carrier removed: {}", removed.id())?;
                    return Ok(());
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
    }

    // The fleet was selected from the directory and fleets are never
    // dropped mid-session, so a miss here is a bug, not user error.
    fn fleet(&self, name: &str) -> Result<&FleetRegistry> {
        self.directory
            .fleet(name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown fleet: {}", name)))
    }

    fn fleet_mut(&mut self, name: &str) -> Result<&mut FleetRegistry> {
        self.directory
            .fleet_mut(name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown fleet: {}", name)))
    }
}

/// Prompt and read one trimmed line; None at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a number, re-asking until it parses; None at end of input
fn prompt_number<T, R, W>(input: &mut R, out: &mut W, text: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = match prompt(input, out, text)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Error: invalid number: {}", line)?,
        }
    }
}
