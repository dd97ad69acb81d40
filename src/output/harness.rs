// Fri Oct 16 2026 - Alex

use crate::config::Dialect;
use crate::structure::ClassId;
use std::fmt;

/// Name of the poisoned scratch buffer every class is constructed into.
pub const BUFFER_NAME: &str = "buffer";
/// Size of the scratch buffer in bytes.
pub const BUFFER_SIZE: usize = 419_430_400;
/// Byte the buffer is filled with before each construction.
pub const POISON_BYTE: u8 = 0xcc;

/// Declarations every generated program starts with.
pub fn write_prologue(f: &mut dyn fmt::Write, check_vptrs: bool) -> fmt::Result {
    writeln!(f, "#if defined(__clang__) || defined(__GNUC__)")?;
    writeln!(f, "typedef __SIZE_TYPE__ size_t;")?;
    writeln!(f, "#endif")?;
    if check_vptrs {
        writeln!(f, "typedef int (__stdcall *FARPROC)();")?;
        writeln!(f, "extern \"C\" __declspec(dllimport) int __stdcall IsBadCodePtr(FARPROC);")?;
        writeln!(f, "extern \"C\" __declspec(dllimport) int __stdcall IsBadReadPtr(const void *, size_t);")?;
    }
    writeln!(f, "extern \"C\" int printf(const char *, ...);")?;
    writeln!(f, "extern \"C\" void *memset(void *, int, size_t);")?;
    writeln!(f, "static char {}[{}];", BUFFER_NAME, BUFFER_SIZE)?;
    writeln!(f, "inline void *operator new(size_t, void *pv) {{ return pv; }}")
}

/// Scans the constructed object for pointer-sized runs that are not poison
/// and reports them as `vfptr`, `vbptr`, or 4-byte `vtordisp` slots.
fn write_pointer_scanner(f: &mut dyn fmt::Write) -> fmt::Result {
    writeln!(f, "\tint count = 0;")?;
    writeln!(f, "\tbool is_ptr = false;")?;
    writeln!(f, "\tfor (unsigned i = 0; i < size_of_class; i++) {{")?;
    writeln!(f, "\t\tunsigned char c = *((const unsigned char*){} + i);", BUFFER_NAME)?;
    writeln!(f, "\t\tif (count != 0) {{")?;
    writeln!(f, "\t\t\tcount += 1;")?;
    writeln!(f, "\t\t}} else if (c == 0x{:x}) {{", POISON_BYTE)?;
    writeln!(f, "\t\t\tcontinue;")?;
    writeln!(f, "\t\t}} else {{")?;
    writeln!(f, "\t\t\tcount = 1;")?;
    writeln!(f, "\t\t\tis_ptr = c != 0x00;")?;
    writeln!(f, "\t\t}}")?;
    writeln!(f, "\t\tif (!is_ptr && count == 4) {{")?;
    writeln!(f, "\t\t\tprintf(\"vtordisp(%s): %u\\n\", class_name, i+1-4);")?;
    writeln!(f, "\t\t\tcount = 0;")?;
    writeln!(
        f,
        "\t\t}} else if (is_ptr && count == sizeof(void *) && !IsBadReadPtr(*(const void **)({b}+i+1-sizeof(void *)), sizeof(void *))) {{",
        b = BUFFER_NAME
    )?;
    writeln!(f, "\t\t\tif (IsBadCodePtr(**(FARPROC**)({}+i+1-sizeof(void *)))) {{", BUFFER_NAME)?;
    writeln!(f, "\t\t\t\tprintf(\"vbptr(%s): %u\\n\", class_name, (unsigned)(i+1-sizeof(void *)));")?;
    writeln!(f, "\t\t\t}} else {{")?;
    writeln!(f, "\t\t\t\tprintf(\"vfptr(%s): %u\\n\", class_name, (unsigned)(i+1-sizeof(void *)));")?;
    writeln!(f, "\t\t\t}}")?;
    writeln!(f, "\t\t\tcount = 0;")?;
    writeln!(f, "\t\t}}")?;
    writeln!(f, "\t}}")
}

/// The layout reporting routine, the `test` macro, and `main`.
pub fn write_epilogue(
    f: &mut dyn fmt::Write,
    dialect: Dialect,
    check_vptrs: bool,
    test_order: &[ClassId],
) -> fmt::Result {
    writeln!(
        f,
        "static void test_layout(const char *class_name, size_t size_of_class, size_t align_of_class) {{"
    )?;
    if check_vptrs {
        write_pointer_scanner(f)?;
    }
    match dialect {
        Dialect::Gnu => {
            writeln!(f, "\tprintf(\"     sizeof(%s): %zu\\n\", class_name, size_of_class);")?;
            writeln!(f, "\tprintf(\"__alignof__(%s): %zu\\n\", class_name, align_of_class);")?;
        }
        Dialect::Microsoft => {
            writeln!(f, "\tprintf(\"   sizeof(%s): %Iu\\n\", class_name, size_of_class);")?;
            writeln!(f, "\tprintf(\"__alignof(%s): %Iu\\n\", class_name, align_of_class);")?;
        }
    }
    writeln!(f, "}}")?;

    writeln!(f, "template <typename Class>")?;
    writeln!(f, "static void init_mem() {{")?;
    writeln!(f, "\tmemset({}, 0x{:x}, sizeof({}));", BUFFER_NAME, POISON_BYTE, BUFFER_NAME)?;
    writeln!(f, "\tnew ({}) Class;", BUFFER_NAME)?;
    writeln!(f, "}}")?;
    writeln!(
        f,
        "#define test(Class) init_mem<Class>(), test_layout(#Class, sizeof(Class), __alignof(Class))"
    )?;

    writeln!(f, "int main() {{")?;
    for class in test_order {
        writeln!(f, "\ttest({});", class)?;
    }
    writeln!(f, "}}")
}
