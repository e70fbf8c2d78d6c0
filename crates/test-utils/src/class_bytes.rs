//! Hand-assembled `.class` files for entry-point discovery tests.

use std::collections::HashMap;

const MAIN_DESCRIPTOR: &str = "([Ljava/lang/String;)V";

/// Builds a class file with version 52, no fields, and methods without
/// code attributes. Annotations carry a single `value` string element.
pub struct ClassFileBuilder {
    name: String,
    methods: Vec<(u16, String, String)>,
    annotations: Vec<String>,
}

impl ClassFileBuilder {
    /// `name` is a binary name such as `com.example.App`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.replace('.', "/"),
            methods: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// `public static void main(String[])`.
    pub fn with_main(self) -> Self {
        self.with_method(0x0009, "main", MAIN_DESCRIPTOR)
    }

    pub fn with_method(mut self, access_flags: u16, name: &str, descriptor: &str) -> Self {
        self.methods
            .push((access_flags, name.to_string(), descriptor.to_string()));
        self
    }

    /// `annotation` is a binary name such as `com.example.Marker`.
    pub fn annotated(mut self, annotation: &str) -> Self {
        self.annotations
            .push(format!("L{};", annotation.replace('.', "/")));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut pool = Pool::default();
        let this_class = pool.class(&self.name);
        let super_class = pool.class("java/lang/Object");
        let methods: Vec<(u16, u16, u16)> = self
            .methods
            .iter()
            .map(|(flags, name, desc)| (*flags, pool.utf8(name), pool.utf8(desc)))
            .collect();
        let annotations: Option<(u16, u16, u16, Vec<u16>)> = if self.annotations.is_empty() {
            None
        } else {
            let attr = pool.utf8("RuntimeVisibleAnnotations");
            let value = pool.utf8("value");
            let text = pool.utf8("generated");
            let types = self.annotations.iter().map(|a| pool.utf8(a)).collect();
            Some((attr, value, text, types))
        };

        let mut out = Vec::new();
        out.extend(0xCAFE_BABE_u32.to_be_bytes());
        out.extend(0u16.to_be_bytes());
        out.extend(52u16.to_be_bytes());
        pool.write(&mut out);

        out.extend(0x0021u16.to_be_bytes());
        out.extend(this_class.to_be_bytes());
        out.extend(super_class.to_be_bytes());
        out.extend(0u16.to_be_bytes()); // interfaces
        out.extend(0u16.to_be_bytes()); // fields

        out.extend((methods.len() as u16).to_be_bytes());
        for (flags, name, desc) in methods {
            out.extend(flags.to_be_bytes());
            out.extend(name.to_be_bytes());
            out.extend(desc.to_be_bytes());
            out.extend(0u16.to_be_bytes());
        }

        match annotations {
            None => out.extend(0u16.to_be_bytes()),
            Some((attr, value, text, types)) => {
                out.extend(1u16.to_be_bytes());
                out.extend(attr.to_be_bytes());
                let mut body = Vec::new();
                body.extend((types.len() as u16).to_be_bytes());
                for ty in types {
                    body.extend(ty.to_be_bytes());
                    body.extend(1u16.to_be_bytes());
                    body.extend(value.to_be_bytes());
                    body.push(b's');
                    body.extend(text.to_be_bytes());
                }
                out.extend((body.len() as u32).to_be_bytes());
                out.extend(body);
            }
        }
        out
    }
}

#[derive(Default)]
struct Pool {
    entries: Vec<Vec<u8>>,
    utf8: HashMap<String, u16>,
}

impl Pool {
    fn push(&mut self, entry: Vec<u8>) -> u16 {
        self.entries.push(entry);
        self.entries.len() as u16
    }

    fn utf8(&mut self, s: &str) -> u16 {
        if let Some(index) = self.utf8.get(s) {
            return *index;
        }
        let mut entry = vec![1u8];
        entry.extend((s.len() as u16).to_be_bytes());
        entry.extend(s.as_bytes());
        let index = self.push(entry);
        self.utf8.insert(s.to_string(), index);
        index
    }

    fn class(&mut self, internal_name: &str) -> u16 {
        let name = self.utf8(internal_name);
        let mut entry = vec![7u8];
        entry.extend(name.to_be_bytes());
        self.push(entry)
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend((self.entries.len() as u16 + 1).to_be_bytes());
        for entry in &self.entries {
            out.extend(entry);
        }
    }
}
