/*
 *  display/components/text.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Date, day, and temperature text bands
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use crate::display::layout::LayoutConfig;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_text::TextBox;
use embedded_text::alignment::HorizontalAlignment;
use embedded_text::style::TextBoxStyleBuilder;

/// Renders the three text bands. Positions come from the layout; fonts
/// are fixed (text layout engines are the host's problem, not ours).
pub struct FaceText {
    layout: LayoutConfig,
}

impl FaceText {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Draw the date/day bands and, when `show_weather` is set, the
    /// centered temperature band.
    pub fn render<D>(
        &self,
        target: &mut D,
        date: &str,
        day: &str,
        weather: &str,
        show_weather: bool,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let band_style = MonoTextStyle::new(&FONT_9X15, Rgb565::WHITE);

        Text::with_baseline(date, self.layout.date.top_left, band_style, Baseline::Top)
            .draw(target)?;
        Text::with_baseline(day, self.layout.day.top_left, band_style, Baseline::Top)
            .draw(target)?;

        if show_weather {
            let char_style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
            let box_style = TextBoxStyleBuilder::new()
                .alignment(HorizontalAlignment::Center)
                .build();
            TextBox::with_textbox_style(weather, self.layout.weather, char_style, box_style)
                .draw(target)?;
        }

        Ok(())
    }
}
