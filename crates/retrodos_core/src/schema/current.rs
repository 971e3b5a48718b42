/*
    retrodos
    https://github.com/retrodos/retrodos

    Copyright 2024-2025 The retrodos developers

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    core::schema::current.rs

    Address table for override files written from ver.22.00.00 onward.

*/

use super::SectionDef;

pub static SECTIONS: &[SectionDef] = &[
    SectionDef {
        index: 0,
        name:  "default",
        items: &[(0, "exetype"), (1, "conf"), (2, "title"), (3, "version")],
    },
    SectionDef {
        index: 1,
        name:  "sdl",
        items: &[
            (0, "fullscreen"),
            (1, "fulldouble"),
            (2, "fullresolution"),
            (3, "windowresolution"),
            (4, "output"),
            (5, "autolock"),
            (6, "sensitivity"),
            (7, "waitonerror"),
            (8, "priority"),
            (9, "mapperfile"),
            (10, "usescancodes"),
        ],
    },
    SectionDef {
        index: 2,
        name:  "render",
        items: &[(0, "frameskip"), (1, "aspect"), (2, "scaler"), (3, "glshader"), (4, "euro")],
    },
    SectionDef {
        index: 3,
        name:  "separator",
        items: &[(0, "line"), (1, "line2")],
    },
    SectionDef {
        index: 4,
        name:  "dosbox",
        items: &[
            (0, "title"),
            (1, "machine"),
            (2, "captures"),
            (3, "fastbioslogo"),
            (4, "startbanner"),
            (5, "quit warning"),
            (6, "language"),
        ],
    },
    SectionDef {
        index: 5,
        name:  "video",
        items: &[(0, "vmemsize"), (1, "vmemsizekb"), (2, "high intensity blinking")],
    },
    SectionDef {
        index: 6,
        name:  "dos",
        items: &[
            (0, "xms"),
            (1, "ems"),
            (2, "umb"),
            (3, "ver"),
            (4, "lfn"),
            (5, "automount"),
            (6, "keyboardlayout"),
        ],
    },
    SectionDef {
        index: 7,
        name:  "dosbox",
        items: &[(0, "memsizekb"), (1, "memalias"), (2, "nocachedir"), (3, "memsize")],
    },
    SectionDef {
        index: 8,
        name:  "cpu",
        items: &[
            (0, "core"),
            (1, "cputype"),
            (2, "cycles"),
            (3, "cycleup"),
            (4, "cycledown"),
            (5, "fpu"),
            (6, "turbo"),
        ],
    },
    SectionDef {
        index: 9,
        name:  "mixer",
        items: &[(0, "nosound"), (1, "rate"), (2, "blocksize"), (3, "prebuffer")],
    },
    SectionDef {
        index: 10,
        name:  "midi",
        items: &[(0, "mpu401"), (1, "mididevice"), (2, "midiconfig"), (3, "mpubase")],
    },
    SectionDef {
        index: 11,
        name:  "sblaster",
        items: &[
            (0, "sbtype"),
            (1, "sbbase"),
            (2, "irq"),
            (3, "dma"),
            (4, "hdma"),
            (5, "oplmode"),
            (6, "oplemu"),
            (7, "oplrate"),
            (8, "sbmixer"),
        ],
    },
    SectionDef {
        index: 12,
        name:  "gus",
        items: &[
            (0, "gus"),
            (1, "gusrate"),
            (2, "gusbase"),
            (3, "gusirq"),
            (4, "gusdma"),
            (5, "ultradir"),
        ],
    },
    SectionDef {
        index: 13,
        name:  "speaker",
        items: &[(0, "pcspeaker"), (1, "pcrate"), (2, "tandy"), (3, "disney")],
    },
    SectionDef {
        index: 14,
        name:  "joystick",
        items: &[
            (0, "joysticktype"),
            (1, "timed"),
            (2, "autofire"),
            (3, "swap34"),
            (4, "buttonwrap"),
        ],
    },
    SectionDef {
        index: 15,
        name:  "serial",
        items: &[(0, "serial1"), (1, "serial2"), (2, "serial3"), (3, "serial4")],
    },
    SectionDef {
        index: 16,
        name:  "ne2000",
        items: &[(0, "ne2000"), (1, "nicbase"), (2, "nicirq"), (3, "backend")],
    },
    SectionDef {
        index: 18,
        name:  "pcem",
        items: &[(0, "machine"), (1, "cpu"), (2, "gfxcard"), (3, "mem_size")],
    },
    SectionDef {
        index: 19,
        name:  "pci",
        items: &[(0, "voodoo")],
    },
    SectionDef {
        index: 20,
        name:  "win9x",
        items: &[
            (0, "resolution"),
            (1, "ddraw"),
            (2, "d3d"),
            (3, "3dfx"),
            (4, "midi"),
            (5, "vol_master"),
            (6, "vol_wave"),
            (7, "vol_midi"),
            (8, "vol_cd"),
        ],
    },
    SectionDef {
        index: 21,
        name:  "voodoo",
        items: &[
            (0, "voodoo_card"),
            (1, "voodoo_maxmem"),
            (2, "glide"),
            (3, "lfb"),
            (4, "splash"),
        ],
    },
];
