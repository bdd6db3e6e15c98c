//! The interactive menu: option list and choice mapping.

use std::io::{self, Write};

/// One menu entry, by its on-screen number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayInventory,
    AddItem,
    RemoveItem,
    UpdateQuantity,
    DecrementQuantity,
    FindByName,
    FindByPriceRange,
    SortByName,
    SortByPrice,
    TotalValue,
    MostExpensive,
    Cheapest,
    Exit,
}

impl MenuChoice {
    /// Map an on-screen option number to a choice.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::DisplayInventory),
            2 => Some(Self::AddItem),
            3 => Some(Self::RemoveItem),
            4 => Some(Self::UpdateQuantity),
            5 => Some(Self::DecrementQuantity),
            6 => Some(Self::FindByName),
            7 => Some(Self::FindByPriceRange),
            8 => Some(Self::SortByName),
            9 => Some(Self::SortByPrice),
            10 => Some(Self::TotalValue),
            11 => Some(Self::MostExpensive),
            12 => Some(Self::Cheapest),
            13 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Render the menu followed by the choice prompt. The prompt carries no
/// trailing newline; the caller flushes before reading.
pub fn write_menu<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "----- Inventory Management Menu -----")?;
    writeln!(out, "1. Display Inventory")?;
    writeln!(out, "2. Add Item")?;
    writeln!(out, "3. Remove Item")?;
    writeln!(out, "4. Update Item Quantity")?;
    writeln!(out, "5. Decrement Item Quantity")?;
    writeln!(out, "6. Find Item by Name")?;
    writeln!(out, "7. Find Items by Price Range")?;
    writeln!(out, "8. Sort Inventory by Name")?;
    writeln!(out, "9. Sort Inventory by Price")?;
    writeln!(out, "10. Display Total Value")?;
    writeln!(out, "11. Display Most Expensive Item")?;
    writeln!(out, "12. Display Cheapest Item")?;
    writeln!(out, "13. Exit")?;
    write!(out, "Enter your choice: ")
}
