// src/launch/class_file.rs

//! Minimal JVM class-file reader.
//!
//! Reads just enough of a `.class` file to answer two questions during
//! entry-point discovery: does the class declare `public static void
//! main(String[])`, and which runtime-visible annotations does it carry.

use thiserror::Error;

const MAGIC: u32 = 0xCAFE_BABE;

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_STATIC: u16 = 0x0008;

const MAIN_METHOD_NAME: &str = "main";
const MAIN_METHOD_DESCRIPTOR: &str = "([Ljava/lang/String;)V";
const RUNTIME_VISIBLE_ANNOTATIONS: &str = "RuntimeVisibleAnnotations";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassFormatError {
    #[error("not a class file (magic {0:#010x})")]
    BadMagic(u32),

    #[error("unexpected end of class file")]
    Truncated,

    #[error("invalid constant pool index {0}")]
    BadIndex(u16),

    #[error("unknown constant pool tag {0}")]
    UnknownTag(u8),

    #[error("unknown annotation element tag {0:?}")]
    UnknownElementTag(char),
}

type Result<T> = std::result::Result<T, ClassFormatError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub access_flags: u16,
    pub name: String,
    pub descriptor: String,
}

impl MethodInfo {
    pub fn is_main(&self) -> bool {
        self.access_flags & (ACC_PUBLIC | ACC_STATIC) == (ACC_PUBLIC | ACC_STATIC)
            && self.name == MAIN_METHOD_NAME
            && self.descriptor == MAIN_METHOD_DESCRIPTOR
    }
}

/// The parts of a class file discovery cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    /// Binary name, e.g. `com.example.App`.
    pub name: String,
    pub methods: Vec<MethodInfo>,
    /// Annotation type descriptors, e.g. `Lcom/example/Marker;`.
    pub annotations: Vec<String>,
}

impl ClassInfo {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut r = Reader::new(bytes);

        let magic = r.u32()?;
        if magic != MAGIC {
            return Err(ClassFormatError::BadMagic(magic));
        }
        r.skip(4)?; // minor + major version

        let pool = ConstantPool::read(&mut r)?;

        r.skip(2)?; // access flags
        let this_class = r.u16()?;
        let name = pool.class_name(this_class)?.replace('/', ".");
        r.skip(2)?; // super class
        let interfaces = r.u16()?;
        r.skip(usize::from(interfaces) * 2)?;

        let fields = r.u16()?;
        for _ in 0..fields {
            r.skip(6)?;
            skip_attributes(&mut r)?;
        }

        let method_count = r.u16()?;
        let mut methods = Vec::with_capacity(usize::from(method_count));
        for _ in 0..method_count {
            let access_flags = r.u16()?;
            let name = pool.utf8(r.u16()?)?.to_string();
            let descriptor = pool.utf8(r.u16()?)?.to_string();
            skip_attributes(&mut r)?;
            methods.push(MethodInfo {
                access_flags,
                name,
                descriptor,
            });
        }

        let mut annotations = Vec::new();
        let attribute_count = r.u16()?;
        for _ in 0..attribute_count {
            let attr_name = pool.utf8(r.u16()?)?;
            let len = r.u32()? as usize;
            let body = r.take(len)?;
            if attr_name == RUNTIME_VISIBLE_ANNOTATIONS {
                annotations.extend(read_annotation_types(&pool, body)?);
            }
        }

        Ok(Self {
            name,
            methods,
            annotations,
        })
    }

    pub fn has_main_method(&self) -> bool {
        self.methods.iter().any(MethodInfo::is_main)
    }

    /// `annotation` is a binary name such as `com.example.Marker`.
    pub fn is_annotated_with(&self, annotation: &str) -> bool {
        let descriptor = format!("L{};", annotation.replace('.', "/"));
        self.annotations.iter().any(|a| *a == descriptor)
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(ClassFormatError::Truncated)?;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(ClassFormatError::Truncated)?;
        self.pos = end;
        Ok(slice)
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}

#[derive(Debug, Clone)]
enum Constant {
    Utf8(String),
    Class(u16),
    Other,
    /// Second slot of a long or double.
    Unusable,
}

struct ConstantPool {
    entries: Vec<Constant>,
}

impl ConstantPool {
    fn read(r: &mut Reader<'_>) -> Result<Self> {
        let count = r.u16()?;
        // Index 0 is never valid.
        let mut entries = vec![Constant::Unusable];
        while entries.len() < usize::from(count) {
            let tag = r.u8()?;
            match tag {
                1 => {
                    let len = r.u16()?;
                    let raw = r.take(usize::from(len))?;
                    entries.push(Constant::Utf8(String::from_utf8_lossy(raw).into_owned()));
                }
                7 => entries.push(Constant::Class(r.u16()?)),
                3 | 4 => {
                    r.skip(4)?;
                    entries.push(Constant::Other);
                }
                5 | 6 => {
                    r.skip(8)?;
                    entries.push(Constant::Other);
                    entries.push(Constant::Unusable);
                }
                8 | 16 | 19 | 20 => {
                    r.skip(2)?;
                    entries.push(Constant::Other);
                }
                9 | 10 | 11 | 12 | 17 | 18 => {
                    r.skip(4)?;
                    entries.push(Constant::Other);
                }
                15 => {
                    r.skip(3)?;
                    entries.push(Constant::Other);
                }
                other => return Err(ClassFormatError::UnknownTag(other)),
            }
        }
        Ok(Self { entries })
    }

    fn utf8(&self, index: u16) -> Result<&str> {
        match self.entries.get(usize::from(index)) {
            Some(Constant::Utf8(s)) => Ok(s.as_str()),
            _ => Err(ClassFormatError::BadIndex(index)),
        }
    }

    fn class_name(&self, index: u16) -> Result<&str> {
        match self.entries.get(usize::from(index)) {
            Some(Constant::Class(name_index)) => self.utf8(*name_index),
            _ => Err(ClassFormatError::BadIndex(index)),
        }
    }
}

fn skip_attributes(r: &mut Reader<'_>) -> Result<()> {
    let count = r.u16()?;
    for _ in 0..count {
        r.skip(2)?;
        let len = r.u32()? as usize;
        r.skip(len)?;
    }
    Ok(())
}

fn read_annotation_types(pool: &ConstantPool, body: &[u8]) -> Result<Vec<String>> {
    let mut r = Reader::new(body);
    let count = r.u16()?;
    let mut types = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        types.push(pool.utf8(r.u16()?)?.to_string());
        skip_element_pairs(&mut r)?;
    }
    Ok(types)
}

fn skip_annotation(r: &mut Reader<'_>) -> Result<()> {
    r.skip(2)?;
    skip_element_pairs(r)
}

fn skip_element_pairs(r: &mut Reader<'_>) -> Result<()> {
    let pairs = r.u16()?;
    for _ in 0..pairs {
        r.skip(2)?;
        skip_element_value(r)?;
    }
    Ok(())
}

fn skip_element_value(r: &mut Reader<'_>) -> Result<()> {
    let tag = r.u8()? as char;
    match tag {
        'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z' | 's' | 'c' => r.skip(2),
        'e' => r.skip(4),
        '@' => skip_annotation(r),
        '[' => {
            let n = r.u16()?;
            for _ in 0..n {
                skip_element_value(r)?;
            }
            Ok(())
        }
        other => Err(ClassFormatError::UnknownElementTag(other)),
    }
}
