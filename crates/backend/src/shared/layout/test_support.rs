//! Fixtures shared by the layout tests

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use contracts::shared::metadata::{
    ColumnConstraints, ColumnDescriptor, ColumnMapping, EntityDescriptor, EnumType,
    LocalizableEnum, PropertyDeclaration, PropertyDescriptor, PropertyType,
};

use super::catalog::EntityCatalog;
use super::metadata_source::{ColumnMetadataSource, PropertyInfoSource};

#[derive(Debug, Clone, Copy)]
pub enum BookType {
    Book,
    Magazine,
    Article,
}

impl LocalizableEnum for BookType {
    fn all() -> Vec<Self> {
        vec![BookType::Book, BookType::Magazine, BookType::Article]
    }

    fn code(&self) -> &'static str {
        match self {
            BookType::Book => "BOOK",
            BookType::Magazine => "MAGAZINE",
            BookType::Article => "ARTICLE",
        }
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            BookType::Book => "book.type.book",
            BookType::Magazine => "book.type.magazine",
            BookType::Article => "book.type.article",
        }
    }
}

fn text(name: &str) -> PropertyDescriptor {
    PropertyDescriptor::new(name, PropertyType::Text)
}

/// Book, Timesheet and Task entities
pub fn book_catalog() -> EntityCatalog {
    let book = EntityDescriptor::new("Book")
        .property(
            text("title")
                .column(ColumnDescriptor::not_null().with_max_length(255))
                .declaration(PropertyDeclaration::labelled("book.title").required()),
        )
        .property(
            text("abstract")
                .column(ColumnDescriptor::nullable().with_max_length(4000))
                .declaration(PropertyDeclaration::labelled("book.abstract")),
        )
        .property(text("comment").column(ColumnDescriptor::nullable().with_max_length(4000)))
        .property(
            text("authors")
                .column(ColumnDescriptor::nullable().with_max_length(255))
                .declaration(
                    PropertyDeclaration::labelled("book.authors")
                        .with_additional_i18n_key("book.authors.info"),
                ),
        )
        .property(
            text("isbn")
                .column(ColumnDescriptor::not_null().with_max_length(255))
                .declaration(PropertyDeclaration::labelled("book.isbn")),
        )
        .property(
            text("signature")
                .column(ColumnDescriptor::nullable().with_max_length(256))
                .declaration(PropertyDeclaration::labelled("book.signature").required()),
        )
        .property(
            text("publisher")
                .column(ColumnDescriptor::nullable().with_max_length(255))
                .declaration(PropertyDeclaration {
                    required: false,
                    i18n_key: Some(String::new()),
                    additional_i18n_key: Some(String::new()),
                }),
        )
        .property(text("keywords").declaration(PropertyDeclaration::default()))
        .property(
            PropertyDescriptor::new("favorite", PropertyType::Boolean)
                .declaration(PropertyDeclaration::labelled("book.favorite")),
        )
        .property(
            PropertyDescriptor::new("lendable", PropertyType::Boolean)
                .column(ColumnDescriptor::not_null())
                .declaration(PropertyDeclaration::labelled("book.lendable")),
        )
        .property(
            PropertyDescriptor::new("yearOfPublishing", PropertyType::Integer)
                .column(ColumnDescriptor::nullable())
                .declaration(PropertyDeclaration::labelled("book.yearOfPublishing")),
        )
        .property(
            PropertyDescriptor::new("price", PropertyType::Decimal)
                .declaration(PropertyDeclaration::labelled("book.price")),
        )
        .property(
            PropertyDescriptor::new("lendOutDate", PropertyType::Date)
                .declaration(PropertyDeclaration::labelled("book.lendOutDate")),
        )
        .property(
            PropertyDescriptor::new("created", PropertyType::Timestamp)
                .declaration(PropertyDeclaration::labelled("created")),
        )
        .property(
            PropertyDescriptor::new("locale", PropertyType::Locale)
                .declaration(PropertyDeclaration::labelled("locale")),
        )
        .property(
            PropertyDescriptor::new("lendOutBy", PropertyType::UserRef)
                .column(
                    ColumnDescriptor::not_null()
                        .with_mapping(ColumnMapping::JoinColumn { nullable: true }),
                )
                .declaration(PropertyDeclaration::labelled("book.lendOutBy")),
        )
        .property(
            PropertyDescriptor::new("task", PropertyType::TaskRef)
                .declaration(PropertyDeclaration::labelled("task")),
        )
        .property(
            PropertyDescriptor::new("type", PropertyType::Enum(EnumType::localizable::<BookType>()))
                .declaration(PropertyDeclaration::labelled("book.type").required()),
        )
        .property(
            PropertyDescriptor::new("status", PropertyType::Enum(EnumType::plain("BookStatus")))
                .declaration(PropertyDeclaration::labelled("book.status")),
        )
        .property(
            PropertyDescriptor::new("coverImage", PropertyType::other("ByteArray"))
                .declaration(PropertyDeclaration::labelled("book.coverImage")),
        );

    let task = EntityDescriptor::new("Task")
        .property(PropertyDescriptor::new("id", PropertyType::Integer))
        .property(text("title").declaration(PropertyDeclaration::labelled("task.title")))
        .property(PropertyDescriptor::new("parentTask", PropertyType::entity("Task")));

    let timesheet = EntityDescriptor::new("Timesheet")
        .property(
            PropertyDescriptor::new("task", PropertyType::TaskRef).column(
                ColumnDescriptor::not_null()
                    .with_mapping(ColumnMapping::JoinColumn { nullable: false }),
            ),
        )
        .property(
            text("description")
                .column(ColumnDescriptor::nullable().with_max_length(4000))
                .declaration(PropertyDeclaration::labelled("timesheet.description")),
        );

    match EntityCatalog::from_entities([book, task, timesheet]) {
        Ok(catalog) => catalog,
        Err(err) => panic!("invalid test catalog: {}", err),
    }
}

/// Counts the round trips to the wrapped source
pub struct CountingSource<S> {
    inner: S,
    type_calls: AtomicUsize,
    declaration_calls: AtomicUsize,
    column_calls: AtomicUsize,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            type_calls: AtomicUsize::new(0),
            declaration_calls: AtomicUsize::new(0),
            column_calls: AtomicUsize::new(0),
        }
    }

    pub fn type_calls(&self) -> usize {
        self.type_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.type_calls()
            + self.declaration_calls.load(Ordering::SeqCst)
            + self.column_calls.load(Ordering::SeqCst)
    }
}

impl<S: ColumnMetadataSource> ColumnMetadataSource for CountingSource<S> {
    fn column_constraints(&self, entity: &str, property: &str) -> Option<ColumnConstraints> {
        self.column_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.column_constraints(entity, property)
    }
}

impl<S: PropertyInfoSource> PropertyInfoSource for CountingSource<S> {
    fn property_type(&self, entity: &str, property: &str) -> Option<PropertyType> {
        self.type_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.property_type(entity, property)
    }

    fn property_declaration(&self, entity: &str, property: &str) -> Option<PropertyDeclaration> {
        self.declaration_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.property_declaration(entity, property)
    }
}

/// Source answering from plain maps keyed by property path, for any entity
#[derive(Default)]
pub struct StubSource {
    types: HashMap<String, PropertyType>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, property: &str, property_type: PropertyType) -> Self {
        self.types.insert(property.to_string(), property_type);
        self
    }
}

impl ColumnMetadataSource for StubSource {
    fn column_constraints(&self, _entity: &str, _property: &str) -> Option<ColumnConstraints> {
        None
    }
}

impl PropertyInfoSource for StubSource {
    fn property_type(&self, _entity: &str, property: &str) -> Option<PropertyType> {
        self.types.get(property).cloned()
    }

    fn property_declaration(&self, _entity: &str, _property: &str) -> Option<PropertyDeclaration> {
        None
    }
}

/// Log output of the code run inside [`CapturedLogs::capture`]
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
