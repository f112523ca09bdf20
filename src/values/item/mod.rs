//! Typed data items bound to a register address.
//!
//! An item owns its current [`FormattedValue`] and moves it to and from the
//! register buffer passed to each call. Single-word types use the [`Native`] layout,
//! 32-bit types the [`Virtual`] layout spanning two words. Any other pairing is
//! rejected at compile time.

mod layout;

use core::marker::PhantomData;

use log::trace;

pub use layout::{Mapped, Native, NativeWord, Virtual, WideWord, WordLayout};

use crate::values::buffer::{RegisterRead, RegisterWrite};
use crate::values::error::{ParseError, RegisterError};
use crate::values::formatted::FormattedValue;
use crate::values::formatting::{STANDARD, ValueFormatting};
use crate::values::parsers::{DefaultParse, ValueParser};
use crate::values::traits::Primitive;
use crate::values::types::{Endianness, FormatOptions, ValueType};

/// A change of an item's raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged<T> {
    pub address: u16,
    pub index: usize,
    pub old: T,
    pub new: T,
}

/// Receives value changes of an item.
pub trait ValueObserver<T> {
    fn value_changed(&mut self, change: &ValueChanged<T>);
}

/// Observer that ignores every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl<T> ValueObserver<T> for NoObserver {
    #[inline]
    fn value_changed(&mut self, _change: &ValueChanged<T>) {}
}

impl<T, F: FnMut(&ValueChanged<T>)> ValueObserver<T> for F {
    #[inline]
    fn value_changed(&mut self, change: &ValueChanged<T>) {
        self(change)
    }
}

/// A formatted value at a register address.
///
/// `L` selects the word layout, `O` receives change notifications. Formatting
/// defaults to [`STANDARD`] and can be replaced with
/// [`with_formatting`](Self::with_formatting).
pub struct TypedDataItem<'f, T, L, O = NoObserver> {
    address: u16,
    index: usize,
    tag: usize,
    value: FormattedValue<T>,
    formatting: &'f ValueFormatting,
    observer: O,
    _layout: PhantomData<L>,
}

/// Item stored in a single word.
pub type NativeDataItem<'f, T, O = NoObserver> = TypedDataItem<'f, T, Native, O>;

/// Item stored in two consecutive words.
pub type VirtualDataItem<'f, T, O = NoObserver> = TypedDataItem<'f, T, Virtual, O>;

impl<T: Primitive, L: WordLayout<T>> TypedDataItem<'static, T, L> {
    pub fn new(address: u16, index: usize, value: FormattedValue<T>) -> Self {
        Self {
            address,
            index,
            tag: 0,
            value,
            formatting: &STANDARD,
            observer: NoObserver,
            _layout: PhantomData,
        }
    }

    /// Item holding an empty value.
    pub fn with_options(address: u16, index: usize, options: FormatOptions) -> Self {
        Self::new(address, index, FormattedValue::empty(options))
    }
}

impl<'f, T: Primitive, L: WordLayout<T>, O: ValueObserver<T>> TypedDataItem<'f, T, L, O> {
    /// Replaces the formatting used for future renderings.
    pub fn with_formatting<'g>(self, formatting: &'g ValueFormatting) -> TypedDataItem<'g, T, L, O> {
        TypedDataItem {
            address: self.address,
            index: self.index,
            tag: self.tag,
            value: self.value,
            formatting,
            observer: self.observer,
            _layout: PhantomData,
        }
    }

    /// Attaches an observer, replacing the current one.
    pub fn with_observer<P: ValueObserver<T>>(self, observer: P) -> TypedDataItem<'f, T, L, P> {
        TypedDataItem {
            address: self.address,
            index: self.index,
            tag: self.tag,
            value: self.value,
            formatting: self.formatting,
            observer,
            _layout: PhantomData,
        }
    }

    /// Caller-defined value carried along with the item.
    pub fn with_tag(mut self, tag: usize) -> Self {
        self.tag = tag;
        self
    }

    #[inline]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn tag(&self) -> usize {
        self.tag
    }

    #[inline]
    pub fn set_tag(&mut self, tag: usize) {
        self.tag = tag;
    }

    /// Number of register words the item spans.
    #[inline]
    pub fn words(&self) -> usize {
        L::WORDS
    }

    #[inline]
    pub fn value(&self) -> &FormattedValue<T> {
        &self.value
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.value.text()
    }

    #[inline]
    pub fn options(&self) -> FormatOptions {
        self.value.options()
    }

    pub fn value_type(&self) -> ValueType {
        ValueType::new(T::TYPE).with_representation(self.options().representation())
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Stores `value`, notifying the observer when the raw value changed.
    pub fn set_value(&mut self, value: FormattedValue<T>) {
        if value == self.value {
            return;
        }
        let old = self.value.value();
        let new = value.value();
        self.value = value;
        if old.to_numeric().bits() != new.to_numeric().bits() {
            trace!("item {:#06x} changed: {:?} -> {:?}", self.address, old, new);
            self.observer.value_changed(&ValueChanged {
                address: self.address,
                index: self.index,
                old,
                new,
            });
        }
    }

    /// Renders `value` with the current options and stores it.
    pub fn update(&mut self, value: T) -> &str {
        self.update_with(value, self.options())
    }

    pub fn update_with(&mut self, value: T, options: FormatOptions) -> &str {
        let formatted = self.formatting.create(value, options);
        self.set_value(formatted);
        self.text()
    }

    /// Re-renders the current value with other options.
    pub fn set_options(&mut self, options: FormatOptions) {
        if options != self.options() {
            let formatted = self.value.reformat(options, self.formatting);
            self.set_value(formatted);
        }
    }

    /// Parses `text` with `parser`, using the current options unless given.
    ///
    /// On failure the stored value is unchanged.
    pub fn try_parse<P>(
        &mut self,
        text: &str,
        options: Option<FormatOptions>,
        parser: &P,
    ) -> Result<(), ParseError>
    where
        P: ValueParser<T> + ?Sized,
    {
        let options = options.unwrap_or_else(|| self.options());
        let parsed = parser.try_parse(text, &options)?;
        self.set_value(parsed);
        Ok(())
    }

    /// Parses `text` with the default parser for `T`.
    pub fn parse(&mut self, text: &str, options: Option<FormatOptions>) -> Result<(), ParseError>
    where
        T: DefaultParse,
    {
        let options = options.unwrap_or_else(|| self.options());
        let parsed = T::parse_with(self.formatting, text, &options)?;
        self.set_value(parsed);
        Ok(())
    }

    /// Loads the value from the item's words.
    pub fn read_from<R>(&mut self, reader: &R, endianness: Endianness) -> Result<(), RegisterError>
    where
        R: RegisterRead + ?Sized,
    {
        let value = L::read(reader, self.address, endianness)?;
        self.update(value);
        Ok(())
    }

    /// Stores the value in the item's words.
    pub fn write_to<W>(&self, writer: &mut W, endianness: Endianness) -> Result<(), RegisterError>
    where
        W: RegisterWrite + ?Sized,
    {
        L::write(self.value.value(), writer, self.address, endianness)
    }
}

/// Type-erased access to data items of any primitive type.
pub trait DataItem {
    fn address(&self) -> u16;
    fn index(&self) -> usize;
    fn tag(&self) -> usize;
    fn words(&self) -> usize;
    fn value_type(&self) -> ValueType;
    fn text(&self) -> &str;
    fn options(&self) -> FormatOptions;
    fn set_options(&mut self, options: FormatOptions);
    fn parse_text(&mut self, text: &str, options: Option<FormatOptions>) -> Result<(), ParseError>;
    fn read_from(&mut self, reader: &dyn RegisterRead, endianness: Endianness) -> Result<(), RegisterError>;
    fn write_to(&self, writer: &mut dyn RegisterWrite, endianness: Endianness) -> Result<(), RegisterError>;
}

impl<T, L, O> DataItem for TypedDataItem<'_, T, L, O>
where
    T: DefaultParse,
    L: WordLayout<T>,
    O: ValueObserver<T>,
{
    fn address(&self) -> u16 {
        self.address
    }

    fn index(&self) -> usize {
        self.index
    }

    fn tag(&self) -> usize {
        self.tag
    }

    fn words(&self) -> usize {
        L::WORDS
    }

    fn value_type(&self) -> ValueType {
        TypedDataItem::value_type(self)
    }

    fn text(&self) -> &str {
        self.value.text()
    }

    fn options(&self) -> FormatOptions {
        self.value.options()
    }

    fn set_options(&mut self, options: FormatOptions) {
        TypedDataItem::set_options(self, options)
    }

    fn parse_text(&mut self, text: &str, options: Option<FormatOptions>) -> Result<(), ParseError> {
        self.parse(text, options)
    }

    fn read_from(&mut self, reader: &dyn RegisterRead, endianness: Endianness) -> Result<(), RegisterError> {
        TypedDataItem::read_from(self, reader, endianness)
    }

    fn write_to(&self, writer: &mut dyn RegisterWrite, endianness: Endianness) -> Result<(), RegisterError> {
        TypedDataItem::write_to(self, writer, endianness)
    }
}

/// Item with the layout that matches `T`.
pub fn create<T: Mapped>(
    address: u16,
    index: usize,
    value: FormattedValue<T>,
) -> TypedDataItem<'static, T, T::Layout> {
    TypedDataItem::new(address, index, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::buffer::{RegisterBuffer, RegisterView};
    use crate::values::parsers::IntegerParser;
    use crate::values::test_support::{Recorder, counting_words, round_trip_formatting};
    use crate::values::types::{NumericType, Representation};

    #[test]
    fn virtual_u32_big_endian_write() {
        let mut item = VirtualDataItem::<u32>::with_options(0x10, 0, FormatOptions::HEX);
        item.update(131_071);
        assert_eq!(item.text(), "0x0001FFFF");

        let mut words = [0u16; 0x20];
        let mut buffer = RegisterBuffer::new(&mut words);
        item.write_to(&mut buffer, Endianness::Big).unwrap();
        assert_eq!(buffer.words()[0x10..0x12], [0x0001, 0xFFFF]);
    }

    #[test]
    fn virtual_i32_alternate_hex() {
        let mut item = VirtualDataItem::<i32>::with_options(0, 0, FormatOptions::HEX.with_alternate(true));
        item.update(i32::MIN + 1);
        assert_eq!(item.text(), "0x80000001");
    }

    #[test]
    fn virtual_i32_little_endian_read() {
        let words = [0x0002, 0x8000];
        let view = RegisterView::new(&words);
        let mut item = VirtualDataItem::<i32>::with_options(0, 0, FormatOptions::DECIMAL);
        item.read_from(&view, Endianness::Little).unwrap();
        assert_eq!(item.value().value(), i32::MIN + 2);
        assert_eq!(item.text(), "-2147483646");
    }

    #[test]
    fn virtual_f32_words() {
        let mut words = [0u16; 4];
        let mut buffer = RegisterBuffer::new(&mut words);

        let mut item = VirtualDataItem::<f32>::with_options(0, 0, FormatOptions::DECIMAL);
        item.parse("1.4", None).unwrap();
        item.write_to(&mut buffer, Endianness::Big).unwrap();
        assert_eq!(buffer.words()[..2], [0x3FB3, 0x3333]);

        item.update(f32::MAX);
        item.write_to(&mut buffer, Endianness::Big).unwrap();
        assert_eq!(buffer.words()[..2], [0x7F7F, 0xFFFF]);

        buffer.try_write_words(2, &[0xFFFF, 0xFF7F]).unwrap();
        let mut min = VirtualDataItem::<f32>::with_options(2, 1, FormatOptions::DECIMAL);
        min.read_from(&buffer, Endianness::Little).unwrap();
        assert_eq!(min.value().value(), f32::MIN);
        assert_eq!(min.text(), "-3.402823E+38");
    }

    #[test]
    fn native_items_ignore_word_order() {
        let words = counting_words::<4>(0xFF00);
        let view = RegisterView::new(&words);
        let mut item = NativeDataItem::<i8>::with_options(1, 0, FormatOptions::DECIMAL);
        item.read_from(&view, Endianness::Big).unwrap();
        assert_eq!(item.value().value(), 1);
        item.read_from(&view, Endianness::Little).unwrap();
        assert_eq!(item.value().value(), 1);
        assert_eq!(item.words(), 1);
    }

    #[test]
    fn out_of_range_leaves_value() {
        let words = [0u16; 2];
        let view = RegisterView::new(&words);
        let mut item = VirtualDataItem::<u32>::with_options(1, 0, FormatOptions::HEX);
        item.update(5);
        assert_eq!(
            item.read_from(&view, Endianness::Big),
            Err(RegisterError::OutOfRange { address: 1, count: 2 })
        );
        assert_eq!(item.value().value(), 5);
    }

    #[test]
    fn observer_sees_raw_changes_only() {
        let recorder = Recorder::<u16>::new();
        let mut item = NativeDataItem::<u16>::with_options(0x20, 3, FormatOptions::HEX)
            .with_observer(recorder.observer());

        item.update(0);
        assert_eq!(recorder.count.get(), 0);

        item.update(0x1234);
        assert_eq!(recorder.count.get(), 1);
        assert_eq!(
            recorder.last.get(),
            Some(ValueChanged { address: 0x20, index: 3, old: 0, new: 0x1234 })
        );

        item.set_options(FormatOptions::DECIMAL);
        assert_eq!(item.text(), "4660");
        assert_eq!(recorder.count.get(), 1);

        item.update(0x1234);
        assert_eq!(recorder.count.get(), 1);
    }

    #[test]
    fn float_observer_compares_bits() {
        let recorder = Recorder::<f32>::new();
        let mut item = VirtualDataItem::<f32>::with_options(0x30, 0, FormatOptions::DECIMAL)
            .with_observer(recorder.observer());

        item.update(0.0);
        assert_eq!(recorder.count.get(), 0);

        item.update(-0.0);
        assert_eq!(item.text(), "-0");
        assert_eq!(recorder.count.get(), 1);
        let change = recorder.last.get().unwrap();
        assert!(change.old.is_sign_positive() && change.new.is_sign_negative());

        item.update(f32::NAN);
        assert_eq!(recorder.count.get(), 2);
        item.update(f32::NAN);
        assert_eq!(recorder.count.get(), 2);
    }

    #[test]
    fn failed_parse_keeps_value() {
        let mut item = NativeDataItem::<u16>::with_options(0, 0, FormatOptions::HEX);
        item.update(0xABCD);
        let parser = IntegerParser::new(&STANDARD);
        assert_eq!(item.try_parse("xyz", None, &parser), Err(ParseError::Invalid));
        assert_eq!(item.value().value(), 0xABCD);

        item.try_parse("0x10", None, &parser).unwrap();
        assert_eq!(item.value().value(), 0x10);

        item.try_parse("10", Some(FormatOptions::DECIMAL), &parser).unwrap();
        assert_eq!(item.value().value(), 10);
        assert_eq!(item.options(), FormatOptions::DECIMAL);
    }

    #[test]
    fn custom_formatting_and_tag() {
        let formatting = round_trip_formatting();
        let mut item = VirtualDataItem::<f32>::with_options(0, 0, FormatOptions::DECIMAL)
            .with_formatting(&formatting)
            .with_tag(42);
        item.update(123_456_789.0);
        assert_eq!(item.text(), "123456792");
        assert_eq!(item.tag(), 42);
    }

    #[test]
    fn items_as_trait_objects() {
        let mut words = [0u16; 8];
        let mut narrow = create(0, 0, FormattedValue::<u16>::empty(FormatOptions::HEX));
        let mut wide = create(2, 1, FormattedValue::<f32>::empty(FormatOptions::DECIMAL));
        let mut items: [&mut dyn DataItem; 2] = [&mut narrow, &mut wide];

        items[0].parse_text("0xBEEF", None).unwrap();
        items[1].parse_text("1234.567", None).unwrap();

        let mut buffer = RegisterBuffer::new(&mut words);
        for item in items.iter() {
            item.write_to(&mut buffer, Endianness::Big).unwrap();
        }
        assert_eq!(buffer.words()[..4], [0xBEEF, 0, 0x449A, 0x5225]);

        assert_eq!(items[1].words(), 2);
        assert_eq!(
            items[1].value_type(),
            ValueType::new(NumericType::F32).with_representation(Representation::Decimal)
        );
        items[0].set_options(FormatOptions::DECIMAL);
        assert_eq!(items[0].text(), "48879");

        let view = buffer.as_view();
        items[0].read_from(&view, Endianness::Big).unwrap();
        assert_eq!(items[0].address(), 0);
    }
}
