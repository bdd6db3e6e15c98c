//! The interactive session: one inventory, one blocking menu loop.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Context;

use stockbook_inventory::{Inventory, UpsertOutcome};

use crate::args::OutputFormat;
use crate::input;
use crate::menu::{self, MenuChoice};
use crate::render;

/// Unwrap a prompted value, or wind the session down at end of input.
macro_rules! prompt {
    ($read:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok(ControlFlow::Break(())),
        }
    };
}

/// All state for one interactive run: the single inventory plus rendering
/// preferences. Constructed per run and dropped with it; nothing survives
/// the process.
#[derive(Debug, Default)]
pub struct Session {
    inventory: Inventory,
    format: OutputFormat,
}

impl Session {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            inventory: Inventory::new(),
            format,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Drive the menu loop until Exit is chosen or input runs out.
    pub fn run<R, W>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        tracing::info!("interactive session started");

        loop {
            menu::write_menu(out).context("failed writing menu")?;
            out.flush().context("failed flushing output")?;

            let Some(number) = input::read_choice_number(input, out)
                .context("failed reading menu choice")?
            else {
                break;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                tracing::debug!(number, "choice outside menu range");
                writeln!(out, "Invalid option. Please try again.")
                    .context("failed writing output")?;
                continue;
            };

            if matches!(choice, MenuChoice::Exit) {
                writeln!(out, "Exiting...").context("failed writing output")?;
                break;
            }

            let flow = self
                .dispatch(choice, input, out)
                .context("terminal I/O failed")?;
            if flow.is_break() {
                break;
            }
        }

        tracing::info!(items = self.inventory.len(), "interactive session ended");
        Ok(())
    }

    fn dispatch<R, W>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        match choice {
            MenuChoice::DisplayInventory => self.display_inventory(out),
            MenuChoice::AddItem => self.add_item(input, out),
            MenuChoice::RemoveItem => self.remove_item(input, out),
            MenuChoice::UpdateQuantity => self.update_quantity(input, out),
            MenuChoice::DecrementQuantity => self.decrement_quantity(input, out),
            MenuChoice::FindByName => self.find_item(input, out),
            MenuChoice::FindByPriceRange => self.find_by_price_range(input, out),
            MenuChoice::SortByName => self.sort_by_name(out),
            MenuChoice::SortByPrice => self.sort_by_price(out),
            MenuChoice::TotalValue => self.total_value(out),
            MenuChoice::MostExpensive => self.most_expensive(out),
            MenuChoice::Cheapest => self.cheapest(out),
            MenuChoice::Exit => Ok(ControlFlow::Break(())),
        }
    }

    fn display_inventory<W>(&self, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        W: Write,
    {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(out, "Inventory:")?;
        }
        render::write_items(out, self.format, self.inventory.items())?;
        Ok(ControlFlow::Continue(()))
    }

    fn add_item<R, W>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt!(input::prompt_name(input, out));
        let quantity = prompt!(input::prompt_u64(input, out, "Enter item quantity: "));
        let price = prompt!(input::prompt_price(input, out, "Enter item price: $"));

        match self.inventory.add_or_restock(&name, quantity, price) {
            Ok(UpsertOutcome::Added) => {
                tracing::debug!(item = %name, quantity, price, "item added");
                writeln!(out, "Item added to the inventory.")?;
            }
            Ok(UpsertOutcome::Restocked) => {
                tracing::debug!(item = %name, quantity, "item restocked");
                writeln!(out, "Item quantity updated.")?;
            }
            Err(error) => {
                tracing::debug!(item = %name, %error, "add rejected");
                render::write_domain_error(out, &error)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn remove_item<R, W>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt!(input::prompt_name(input, out));

        match self.inventory.remove(&name) {
            Ok(removed) => {
                tracing::debug!(item = %removed.name(), "item removed");
                writeln!(out, "Item removed from the inventory.")?;
            }
            Err(error) => {
                tracing::debug!(item = %name, %error, "remove rejected");
                render::write_domain_error(out, &error)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn update_quantity<R, W>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt!(input::prompt_name(input, out));
        let delta = prompt!(input::prompt_i64(input, out, "Enter quantity change: "));

        match self.inventory.set_quantity(&name, delta) {
            Ok(()) => {
                tracing::debug!(item = %name, delta, "quantity updated");
                writeln!(out, "Item quantity updated.")?;
            }
            Err(error) => {
                tracing::debug!(item = %name, %error, "quantity update rejected");
                render::write_domain_error(out, &error)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn decrement_quantity<R, W>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt!(input::prompt_name(input, out));
        let amount = prompt!(input::prompt_u64(input, out, "Enter quantity to decrement: "));

        match self.inventory.decrement(&name, amount) {
            Ok(()) => {
                tracing::debug!(item = %name, amount, "quantity decremented");
                writeln!(out, "Item quantity updated.")?;
            }
            Err(error) => {
                tracing::debug!(item = %name, %error, "decrement rejected");
                render::write_domain_error(out, &error)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn find_item<R, W>(&self, input: &mut R, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt!(input::prompt_name(input, out));

        match self.inventory.find_by_name(&name) {
            Ok(item) => render::write_item(out, self.format, item)?,
            Err(error) => render::write_domain_error(out, &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn find_by_price_range<R, W>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<ControlFlow<()>>
    where
        R: BufRead,
        W: Write,
    {
        let min = prompt!(input::prompt_f64(input, out, "Enter minimum price: $"));
        let max = prompt!(input::prompt_f64(input, out, "Enter maximum price: $"));

        if matches!(self.format, OutputFormat::Text) {
            writeln!(out, "Items within price range ${min} to ${max}:")?;
        }
        let found = self.inventory.find_by_price_range(min, max);
        render::write_items(out, self.format, &found)?;
        Ok(ControlFlow::Continue(()))
    }

    fn sort_by_name<W>(&mut self, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        W: Write,
    {
        self.inventory.sort_by_name();
        tracing::debug!("inventory sorted by name");
        writeln!(out, "Inventory sorted by name.")?;
        Ok(ControlFlow::Continue(()))
    }

    fn sort_by_price<W>(&mut self, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        W: Write,
    {
        self.inventory.sort_by_price();
        tracing::debug!("inventory sorted by price");
        writeln!(out, "Inventory sorted by price.")?;
        Ok(ControlFlow::Continue(()))
    }

    fn total_value<W>(&self, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        W: Write,
    {
        render::write_total_value(out, self.format, self.inventory.total_value())?;
        Ok(ControlFlow::Continue(()))
    }

    fn most_expensive<W>(&self, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        W: Write,
    {
        match self.inventory.most_expensive() {
            Ok(item) => render::write_labeled_item(
                out,
                self.format,
                "Most expensive item in the inventory: ",
                item,
            )?,
            Err(error) => render::write_domain_error(out, &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn cheapest<W>(&self, out: &mut W) -> anyhow::Result<ControlFlow<()>>
    where
        W: Write,
    {
        match self.inventory.cheapest() {
            Ok(item) => render::write_labeled_item(
                out,
                self.format,
                "Cheapest item in the inventory: ",
                item,
            )?,
            Err(error) => render::write_domain_error(out, &error)?,
        }
        Ok(ControlFlow::Continue(()))
    }
}
