//! The shared arena holding every class, method, and field seen across both
//! sides of a match run.

use std::collections::HashMap;

use super::{Class, ClassId, Field, FieldId, Method, MethodId, class::Side};

/// Owns every [`Class`], [`Method`], and [`Field`] created while loading both
/// revisions of the artifact, addressed by the [`ClassId`]/[`MethodId`]/[`FieldId`]
/// indices stored throughout the structural graph.
///
/// A single arena (rather than one per side) is what lets a synthetic class be a
/// single entry shared between both sides (§3): there is exactly one `Class`
/// value, and both the old and new call sites that produced it point at the same
/// id.
#[derive(Debug, Default)]
pub struct World {
    classes: Vec<Class>,
    methods: Vec<Method>,
    fields: Vec<Field>,
    by_name: HashMap<String, Vec<ClassId>>,
}

impl World {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next id and inserts a class built from it.
    pub fn push_class(&mut self, build: impl FnOnce(ClassId) -> Class) -> ClassId {
        let id = ClassId(u32::try_from(self.classes.len()).expect("class arena overflow"));
        let class = build(id);
        self.by_name.entry(class.binary_name().to_owned()).or_default().push(id);
        self.classes.push(class);
        id
    }

    /// Finds a class by binary name on a given side (or shared).
    ///
    /// Two classes with the same binary name can legitimately coexist on the
    /// same side only via malformed input; when that happens this returns the
    /// first one loaded.
    #[must_use]
    pub fn find_class(&self, name: &str, side: Side) -> Option<ClassId> {
        self.by_name
            .get(name)?
            .iter()
            .copied()
            .find(|&id| classes_match_side(self.class(id).side(), side))
    }

    /// Reserves the next id and inserts a method built from it.
    pub fn push_method(&mut self, build: impl FnOnce(MethodId) -> Method) -> MethodId {
        let id = MethodId(u32::try_from(self.methods.len()).expect("method arena overflow"));
        self.methods.push(build(id));
        id
    }

    /// Reserves the next id and inserts a field built from it.
    pub fn push_field(&mut self, build: impl FnOnce(FieldId) -> Field) -> FieldId {
        let id = FieldId(u32::try_from(self.fields.len()).expect("field arena overflow"));
        self.fields.push(build(id));
        id
    }

    /// The class with the given id.
    #[must_use]
    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    /// The class with the given id, mutably.
    pub fn class_mut(&mut self, id: ClassId) -> &mut Class {
        &mut self.classes[id.index()]
    }

    /// The method with the given id.
    #[must_use]
    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.index()]
    }

    /// The method with the given id, mutably.
    pub fn method_mut(&mut self, id: MethodId) -> &mut Method {
        &mut self.methods[id.index()]
    }

    /// The field with the given id.
    #[must_use]
    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    /// The field with the given id, mutably.
    pub fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }

    /// All classes on a given side, in declaration order.
    pub fn classes_on(&self, side: Side) -> impl Iterator<Item = &Class> {
        self.classes
            .iter()
            .filter(move |class| classes_match_side(class.side(), side))
    }

    /// Total number of classes in the arena (both sides, plus shared synthetics).
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Matches two classes to each other, clearing any prior match on either side.
    pub fn match_classes(&self, a: ClassId, b: ClassId) {
        self.unmatch_class(a);
        self.unmatch_class(b);
        self.class(a).match_cell().set(Some(b));
        self.class(b).match_cell().set(Some(a));
    }

    /// Clears `a`'s match, and the reciprocal match on whatever it was matched to.
    pub fn unmatch_class(&self, a: ClassId) {
        if let Some(b) = self.class(a).match_cell().get() {
            if b != a {
                self.class(b).match_cell().set(None);
            }
        }
        self.class(a).match_cell().set(None);
    }

    /// Matches two methods to each other, clearing any prior match on either side.
    pub fn match_methods(&self, a: MethodId, b: MethodId) {
        self.unmatch_method(a);
        self.unmatch_method(b);
        self.method(a).match_cell().set(Some(b));
        self.method(b).match_cell().set(Some(a));
    }

    /// Clears `a`'s method match, and the reciprocal match.
    pub fn unmatch_method(&self, a: MethodId) {
        if let Some(b) = self.method(a).match_cell().get() {
            self.method(b).match_cell().set(None);
        }
        self.method(a).match_cell().set(None);
    }

    /// Matches two fields to each other, clearing any prior match on either side.
    pub fn match_fields(&self, a: FieldId, b: FieldId) {
        self.unmatch_field(a);
        self.unmatch_field(b);
        self.field(a).match_cell().set(Some(b));
        self.field(b).match_cell().set(Some(a));
    }

    /// Clears `a`'s field match, and the reciprocal match.
    pub fn unmatch_field(&self, a: FieldId) {
        if let Some(b) = self.field(a).match_cell().get() {
            self.field(b).match_cell().set(None);
        }
        self.field(a).match_cell().set(None);
    }
}

fn classes_match_side(class_side: Side, query: Side) -> bool {
    match (class_side, query) {
        (Side::Shared, _) => true,
        (side, query) => matches!((side, query), (Side::A, Side::A) | (Side::B, Side::B)),
    }
}
