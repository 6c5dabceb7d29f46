//! Built-in named colors.
//!
//! Keys are camelCase identifiers. Every entry is an opaque 8-bit RGB triple.

/// Built-in `(name, [r, g, b])` pairs, sorted by name.
pub static NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("airForceBlueRaf", [93, 138, 168]),
    ("airForceBlueUsaf", [0, 48, 143]),
    ("airSuperiorityBlue", [114, 160, 193]),
    ("alabamaCrimson", [163, 38, 56]),
    ("aliceBlue", [240, 248, 255]),
    ("alizarinCrimson", [227, 38, 54]),
    ("alloyOrange", [196, 98, 16]),
    ("almond", [239, 222, 205]),
    ("amaranth", [229, 43, 80]),
    ("amber", [255, 191, 0]),
    ("amberSaeEce", [255, 126, 0]),
    ("americanRose", [255, 3, 62]),
    ("amethyst", [153, 102, 204]),
    ("androidGreen", [164, 198, 57]),
    ("antiFlashWhite", [242, 243, 244]),
    ("antiqueBrass", [205, 149, 117]),
    ("antiqueFuchsia", [145, 92, 131]),
    ("antiqueRuby", [132, 27, 45]),
    ("antiqueWhite", [250, 235, 215]),
    ("aoEnglish", [0, 128, 0]),
    ("appleGreen", [141, 182, 0]),
    ("apricot", [251, 206, 177]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("armyGreen", [75, 83, 32]),
    ("arsenic", [59, 68, 75]),
    ("arylideYellow", [233, 214, 107]),
    ("ashGrey", [178, 190, 181]),
    ("asparagus", [135, 169, 107]),
    ("atomicTangerine", [255, 153, 102]),
    ("auburn", [165, 42, 42]),
    ("aureolin", [253, 238, 0]),
    ("aurometalsaurus", [110, 127, 128]),
    ("avocado", [86, 130, 3]),
    ("azure", [0, 127, 255]),
    ("azureMistWeb", [240, 255, 255]),
    ("babyBlue", [137, 207, 240]),
    ("babyBlueEyes", [161, 202, 241]),
    ("babyPink", [244, 194, 194]),
    ("ballBlue", [33, 171, 205]),
    ("bananaMania", [250, 231, 181]),
    ("bananaYellow", [255, 225, 53]),
    ("barnRed", [124, 10, 2]),
    ("battleshipGrey", [132, 132, 130]),
    ("bazaar", [152, 119, 123]),
    ("beauBlue", [188, 212, 230]),
    ("beaver", [159, 129, 112]),
    ("beige", [245, 245, 220]),
    ("bigDipORuby", [156, 37, 66]),
    ("bisque", [255, 228, 196]),
    ("bistre", [61, 43, 31]),
    ("bittersweet", [254, 111, 94]),
    ("bittersweetShimmer", [191, 79, 81]),
    ("black", [0, 0, 0]),
    ("blackBean", [61, 12, 2]),
    ("blackLeatherJacket", [37, 53, 41]),
    ("blackOlive", [59, 60, 54]),
    ("blanchedAlmond", [255, 235, 205]),
    ("blastOffBronze", [165, 113, 100]),
    ("bleuDeFrance", [49, 140, 231]),
    ("blizzardBlue", [172, 229, 238]),
    ("blond", [250, 240, 190]),
    ("blue", [0, 0, 255]),
    ("blueBell", [162, 162, 208]),
    ("blueCrayola", [31, 117, 254]),
    ("blueGray", [102, 153, 204]),
    ("blueGreen", [13, 152, 186]),
    ("blueMunsell", [0, 147, 175]),
    ("blueNcs", [0, 135, 189]),
    ("bluePigment", [51, 51, 153]),
    ("blueRyb", [2, 71, 254]),
    ("blueSapphire", [18, 97, 128]),
    ("blueViolet", [138, 43, 226]),
    ("blush", [222, 93, 131]),
    ("bole", [121, 68, 59]),
    ("bondiBlue", [0, 149, 182]),
    ("bone", [227, 218, 201]),
    ("bostonUniversityRed", [204, 0, 0]),
    ("bottleGreen", [0, 106, 78]),
    ("boysenberry", [135, 50, 96]),
    ("brandeisBlue", [0, 112, 255]),
    ("brass", [181, 166, 66]),
    ("brickRed", [203, 65, 84]),
    ("brightCerulean", [29, 172, 214]),
    ("brightGreen", [102, 255, 0]),
    ("brightLavender", [191, 148, 228]),
    ("brightMaroon", [195, 33, 72]),
    ("brightPink", [255, 0, 127]),
    ("brightTurquoise", [8, 232, 222]),
    ("brightUbe", [209, 159, 232]),
    ("brilliantLavender", [244, 187, 255]),
    ("brilliantRose", [255, 85, 163]),
    ("brinkPink", [251, 96, 127]),
    ("britishRacingGreen", [0, 66, 37]),
    ("bronze", [205, 127, 50]),
    ("brownTraditional", [150, 75, 0]),
    ("brownWeb", [165, 42, 42]),
    ("bubbleGum", [255, 193, 204]),
    ("bubbles", [231, 254, 255]),
    ("buff", [240, 220, 130]),
    ("bulgarianRose", [72, 6, 7]),
    ("burgundy", [128, 0, 32]),
    ("burlywood", [222, 184, 135]),
    ("burntOrange", [204, 85, 0]),
    ("burntSienna", [233, 116, 81]),
    ("burntUmber", [138, 51, 36]),
    ("byzantine", [189, 51, 164]),
    ("byzantium", [112, 41, 99]),
    ("cadet", [83, 104, 114]),
    ("cadetBlue", [95, 158, 160]),
    ("cadetGrey", [145, 163, 176]),
    ("cadmiumGreen", [0, 107, 60]),
    ("cadmiumOrange", [237, 135, 45]),
    ("cadmiumRed", [227, 0, 34]),
    ("cadmiumYellow", [255, 246, 0]),
    ("cafAuLait", [166, 123, 91]),
    ("cafNoir", [75, 54, 33]),
    ("calPolyGreen", [30, 77, 43]),
    ("cambridgeBlue", [163, 193, 173]),
    ("camel", [193, 154, 107]),
    ("cameoPink", [239, 187, 204]),
    ("camouflageGreen", [120, 134, 107]),
    ("canaryYellow", [255, 239, 0]),
    ("candyAppleRed", [255, 8, 0]),
    ("candyPink", [228, 113, 122]),
    ("capri", [0, 191, 255]),
    ("caputMortuum", [89, 39, 32]),
    ("cardinal", [196, 30, 58]),
    ("caribbeanGreen", [0, 204, 153]),
    ("carmine", [150, 0, 24]),
    ("carmineMP", [215, 0, 64]),
    ("carminePink", [235, 76, 66]),
    ("carmineRed", [255, 0, 56]),
    ("carnationPink", [255, 166, 201]),
    ("carnelian", [179, 27, 27]),
    ("carolinaBlue", [153, 186, 221]),
    ("carrotOrange", [237, 145, 33]),
    ("catalinaBlue", [6, 42, 120]),
    ("ceil", [146, 161, 207]),
    ("celadon", [172, 225, 175]),
    ("celadonBlue", [0, 123, 167]),
    ("celadonGreen", [47, 132, 124]),
    ("celesteColour", [178, 255, 255]),
    ("celestialBlue", [73, 151, 208]),
    ("cerise", [222, 49, 99]),
    ("cerisePink", [236, 59, 131]),
    ("cerulean", [0, 123, 167]),
    ("ceruleanBlue", [42, 82, 190]),
    ("ceruleanFrost", [109, 155, 195]),
    ("cgBlue", [0, 122, 165]),
    ("cgRed", [224, 60, 49]),
    ("chamoisee", [160, 120, 90]),
    ("champagne", [250, 214, 165]),
    ("charcoal", [54, 69, 79]),
    ("charmPink", [230, 143, 172]),
    ("chartreuseTraditional", [223, 255, 0]),
    ("chartreuseWeb", [127, 255, 0]),
    ("cherry", [222, 49, 99]),
    ("cherryBlossomPink", [255, 183, 197]),
    ("chestnut", [205, 92, 92]),
    ("chinaPink", [222, 111, 161]),
    ("chinaRose", [168, 81, 110]),
    ("chineseRed", [170, 56, 30]),
    ("chocolateTraditional", [123, 63, 0]),
    ("chocolateWeb", [210, 105, 30]),
    ("chromeYellow", [255, 167, 0]),
    ("cinereous", [152, 129, 123]),
    ("cinnabar", [227, 66, 52]),
    ("cinnamon", [210, 105, 30]),
    ("citrine", [228, 208, 10]),
    ("classicRose", [251, 204, 231]),
    ("cobalt", [0, 71, 171]),
    ("cocoaBrown", [210, 105, 30]),
    ("coffee", [111, 78, 55]),
    ("columbiaBlue", [155, 221, 255]),
    ("congoPink", [248, 131, 121]),
    ("coolBlack", [0, 46, 99]),
    ("coolGrey", [140, 146, 172]),
    ("copper", [184, 115, 51]),
    ("copperCrayola", [218, 138, 103]),
    ("copperPenny", [173, 111, 105]),
    ("copperRed", [203, 109, 81]),
    ("copperRose", [153, 102, 102]),
    ("coquelicot", [255, 56, 0]),
    ("coral", [255, 127, 80]),
    ("coralPink", [248, 131, 121]),
    ("coralRed", [255, 64, 64]),
    ("cordovan", [137, 63, 69]),
    ("corn", [251, 236, 93]),
    ("cornellRed", [179, 27, 27]),
    ("cornflowerBlue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("cosmicLatte", [255, 248, 231]),
    ("cottonCandy", [255, 188, 217]),
    ("cream", [255, 253, 208]),
    ("crimson", [220, 20, 60]),
    ("crimsonGlory", [190, 0, 50]),
    ("cyan", [0, 255, 255]),
    ("cyanProcess", [0, 183, 235]),
    ("daffodil", [255, 255, 49]),
    ("dandelion", [240, 225, 48]),
    ("darkBlue", [0, 0, 139]),
    ("darkBrown", [101, 67, 33]),
    ("darkByzantium", [93, 57, 84]),
    ("darkCandyAppleRed", [164, 0, 0]),
    ("darkCerulean", [8, 69, 126]),
    ("darkChestnut", [152, 105, 96]),
    ("darkCoral", [205, 91, 69]),
    ("darkCyan", [0, 139, 139]),
    ("darkElectricBlue", [83, 104, 120]),
    ("darkGoldenrod", [184, 134, 11]),
    ("darkGray", [169, 169, 169]),
    ("darkGreen", [1, 50, 32]),
    ("darkImperialBlue", [0, 65, 106]),
    ("darkJungleGreen", [26, 36, 33]),
    ("darkKhaki", [189, 183, 107]),
    ("darkLava", [72, 60, 50]),
    ("darkLavender", [115, 79, 150]),
    ("darkMagenta", [139, 0, 139]),
    ("darkMidnightBlue", [0, 51, 102]),
    ("darkOliveGreen", [85, 107, 47]),
    ("darkOrange", [255, 140, 0]),
    ("darkOrchid", [153, 50, 204]),
    ("darkPastelBlue", [119, 158, 203]),
    ("darkPastelGreen", [3, 192, 60]),
    ("darkPastelPurple", [150, 111, 214]),
    ("darkPastelRed", [194, 59, 34]),
    ("darkPink", [231, 84, 128]),
    ("darkPowderBlue", [0, 51, 153]),
    ("darkRaspberry", [135, 38, 87]),
    ("darkRed", [139, 0, 0]),
    ("darkSalmon", [233, 150, 122]),
    ("darkScarlet", [86, 3, 25]),
    ("darkSeaGreen", [143, 188, 143]),
    ("darkSienna", [60, 20, 20]),
    ("darkSlateBlue", [72, 61, 139]),
    ("darkSlateGray", [47, 79, 79]),
    ("darkSpringGreen", [23, 114, 69]),
    ("darkTan", [145, 129, 81]),
    ("darkTangerine", [255, 168, 18]),
    ("darkTaupe", [72, 60, 50]),
    ("darkTerraCotta", [204, 78, 92]),
    ("darkTurquoise", [0, 206, 209]),
    ("darkViolet", [148, 0, 211]),
    ("darkYellow", [155, 135, 12]),
    ("dartmouthGreen", [0, 112, 60]),
    ("davySGrey", [85, 85, 85]),
    ("debianRed", [215, 10, 83]),
    ("deepCarmine", [169, 32, 62]),
    ("deepCarminePink", [239, 48, 56]),
    ("deepCarrotOrange", [233, 105, 44]),
    ("deepCerise", [218, 50, 135]),
    ("deepChampagne", [250, 214, 165]),
    ("deepChestnut", [185, 78, 72]),
    ("deepCoffee", [112, 66, 65]),
    ("deepFuchsia", [193, 84, 193]),
    ("deepJungleGreen", [0, 75, 73]),
    ("deepLilac", [153, 85, 187]),
    ("deepMagenta", [204, 0, 204]),
    ("deepPeach", [255, 203, 164]),
    ("deepPink", [255, 20, 147]),
    ("deepRuby", [132, 63, 91]),
    ("deepSaffron", [255, 153, 51]),
    ("deepSkyBlue", [0, 191, 255]),
    ("deepTuscanRed", [102, 66, 77]),
    ("denim", [21, 96, 189]),
    ("desert", [193, 154, 107]),
    ("desertSand", [237, 201, 175]),
    ("dimGray", [105, 105, 105]),
    ("dodgerBlue", [30, 144, 255]),
    ("dogwoodRose", [215, 24, 104]),
    ("dollarBill", [133, 187, 101]),
    ("drab", [150, 113, 23]),
    ("dukeBlue", [0, 0, 156]),
    ("earthYellow", [225, 169, 95]),
    ("ebony", [85, 93, 80]),
    ("ecru", [194, 178, 128]),
    ("eggplant", [97, 64, 81]),
    ("eggshell", [240, 234, 214]),
    ("egyptianBlue", [16, 52, 166]),
    ("electricBlue", [125, 249, 255]),
    ("electricCrimson", [255, 0, 63]),
    ("electricCyan", [0, 255, 255]),
    ("electricGreen", [0, 255, 0]),
    ("electricIndigo", [111, 0, 255]),
    ("electricLavender", [244, 187, 255]),
    ("electricLime", [204, 255, 0]),
    ("electricPurple", [191, 0, 255]),
    ("electricUltramarine", [63, 0, 255]),
    ("electricViolet", [143, 0, 255]),
    ("electricYellow", [255, 255, 0]),
    ("emerald", [80, 200, 120]),
    ("englishLavender", [180, 131, 149]),
    ("etonBlue", [150, 200, 162]),
    ("fallow", [193, 154, 107]),
    ("faluRed", [128, 24, 24]),
    ("fandango", [181, 51, 137]),
    ("fashionFuchsia", [244, 0, 161]),
    ("fawn", [229, 170, 112]),
    ("feldgrau", [77, 93, 83]),
    ("fernGreen", [79, 121, 66]),
    ("ferrariRed", [255, 40, 0]),
    ("fieldDrab", [108, 84, 30]),
    ("fireEngineRed", [206, 32, 41]),
    ("firebrick", [178, 34, 34]),
    ("flame", [226, 88, 34]),
    ("flamingoPink", [252, 142, 172]),
    ("flavescent", [247, 233, 142]),
    ("flax", [238, 220, 130]),
    ("floralWhite", [255, 250, 240]),
    ("fluorescentOrange", [255, 191, 0]),
    ("fluorescentPink", [255, 20, 147]),
    ("fluorescentYellow", [204, 255, 0]),
    ("folly", [255, 0, 79]),
    ("forestGreenTraditional", [1, 68, 33]),
    ("forestGreenWeb", [34, 139, 34]),
    ("frenchBeige", [166, 123, 91]),
    ("frenchBlue", [0, 114, 187]),
    ("frenchLilac", [134, 96, 142]),
    ("frenchLime", [204, 255, 0]),
    ("frenchRaspberry", [199, 44, 72]),
    ("frenchRose", [246, 74, 138]),
    ("fuchsia", [255, 0, 255]),
    ("fuchsiaCrayola", [193, 84, 193]),
    ("fuchsiaPink", [255, 119, 255]),
    ("fuchsiaRose", [199, 67, 117]),
    ("fulvous", [228, 132, 0]),
    ("fuzzyWuzzy", [204, 102, 102]),
    ("gainsboro", [220, 220, 220]),
    ("gamboge", [228, 155, 15]),
    ("ghostWhite", [248, 248, 255]),
    ("ginger", [176, 101, 0]),
    ("glaucous", [96, 130, 182]),
    ("glitter", [230, 232, 250]),
    ("goldMetallic", [212, 175, 55]),
    ("goldWebGolden", [255, 215, 0]),
    ("goldenBrown", [153, 101, 21]),
    ("goldenPoppy", [252, 194, 0]),
    ("goldenYellow", [255, 223, 0]),
    ("goldenrod", [218, 165, 32]),
    ("grannySmithApple", [168, 228, 160]),
    ("gray", [128, 128, 128]),
    ("grayAsparagus", [70, 89, 69]),
    ("grayHtmlCssGray", [128, 128, 128]),
    ("grayX11Gray", [190, 190, 190]),
    ("greenColorWheelX11Green", [0, 255, 0]),
    ("greenCrayola", [28, 172, 120]),
    ("greenHtmlCssGreen", [0, 128, 0]),
    ("greenMunsell", [0, 168, 119]),
    ("greenNcs", [0, 159, 107]),
    ("greenPigment", [0, 165, 80]),
    ("greenRyb", [102, 176, 50]),
    ("greenYellow", [173, 255, 47]),
    ("grullo", [169, 154, 134]),
    ("guppieGreen", [0, 255, 127]),
    ("halayBe", [102, 56, 84]),
    ("hanBlue", [68, 108, 207]),
    ("hanPurple", [82, 24, 250]),
    ("hansaYellow", [233, 214, 107]),
    ("harlequin", [63, 255, 0]),
    ("harvardCrimson", [201, 0, 22]),
    ("harvestGold", [218, 145, 0]),
    ("heartGold", [128, 128, 0]),
    ("heliotrope", [223, 115, 255]),
    ("hollywoodCerise", [244, 0, 161]),
    ("honeydew", [240, 255, 240]),
    ("honoluluBlue", [0, 127, 191]),
    ("hookerSGreen", [73, 121, 107]),
    ("hotMagenta", [255, 29, 206]),
    ("hotPink", [255, 105, 180]),
    ("hunterGreen", [53, 94, 59]),
    ("iceberg", [113, 166, 210]),
    ("icterine", [252, 247, 94]),
    ("imperialBlue", [0, 35, 149]),
    ("inchworm", [178, 236, 93]),
    ("indiaGreen", [19, 136, 8]),
    ("indianRed", [205, 92, 92]),
    ("indianYellow", [227, 168, 87]),
    ("indigo", [111, 0, 255]),
    ("indigoDye", [0, 65, 106]),
    ("indigoWeb", [75, 0, 130]),
    ("internationalKleinBlue", [0, 47, 167]),
    ("internationalOrangeAerospace", [255, 79, 0]),
    ("internationalOrangeEngineering", [186, 22, 12]),
    ("internationalOrangeGoldenGateBridge", [192, 54, 44]),
    ("iris", [90, 79, 207]),
    ("isabelline", [244, 240, 236]),
    ("islamicGreen", [0, 144, 0]),
    ("ivory", [255, 255, 240]),
    ("jade", [0, 168, 107]),
    ("jasmine", [248, 222, 126]),
    ("jasper", [215, 59, 62]),
    ("jazzberryJam", [165, 11, 94]),
    ("jet", [52, 52, 52]),
    ("jonquil", [250, 218, 94]),
    ("juneBud", [189, 218, 87]),
    ("jungleGreen", [41, 171, 135]),
    ("kellyGreen", [76, 187, 23]),
    ("kenyanCopper", [124, 28, 5]),
    ("khakiHtmlCssKhaki", [195, 176, 145]),
    ("khakiX11LightKhaki", [240, 230, 140]),
    ("kuCrimson", [232, 0, 13]),
    ("laSalleGreen", [8, 120, 48]),
    ("languidLavender", [214, 202, 221]),
    ("lapisLazuli", [38, 97, 156]),
    ("laserLemon", [254, 254, 34]),
    ("laurelGreen", [169, 186, 157]),
    ("lava", [207, 16, 32]),
    ("lavenderBlue", [204, 204, 255]),
    ("lavenderBlush", [255, 240, 245]),
    ("lavenderFloral", [181, 126, 220]),
    ("lavenderGray", [196, 195, 208]),
    ("lavenderIndigo", [148, 87, 235]),
    ("lavenderMagenta", [238, 130, 238]),
    ("lavenderMist", [230, 230, 250]),
    ("lavenderPink", [251, 174, 210]),
    ("lavenderPurple", [150, 123, 182]),
    ("lavenderRose", [251, 160, 227]),
    ("lavenderWeb", [230, 230, 250]),
    ("lawnGreen", [124, 252, 0]),
    ("lemon", [255, 247, 0]),
    ("lemonChiffon", [255, 250, 205]),
    ("lemonLime", [227, 255, 0]),
    ("licorice", [26, 17, 16]),
    ("lightApricot", [253, 213, 177]),
    ("lightBlue", [173, 216, 230]),
    ("lightBrown", [181, 101, 29]),
    ("lightCarminePink", [230, 103, 113]),
    ("lightCoral", [240, 128, 128]),
    ("lightCornflowerBlue", [147, 204, 234]),
    ("lightCrimson", [245, 105, 145]),
    ("lightCyan", [224, 255, 255]),
    ("lightFuchsiaPink", [249, 132, 239]),
    ("lightGoldenrodYellow", [250, 250, 210]),
    ("lightGray", [211, 211, 211]),
    ("lightGreen", [144, 238, 144]),
    ("lightKhaki", [240, 230, 140]),
    ("lightPastelPurple", [177, 156, 217]),
    ("lightPink", [255, 182, 193]),
    ("lightRedOchre", [233, 116, 81]),
    ("lightSalmon", [255, 160, 122]),
    ("lightSalmonPink", [255, 153, 153]),
    ("lightSeaGreen", [32, 178, 170]),
    ("lightSkyBlue", [135, 206, 250]),
    ("lightSlateGray", [119, 136, 153]),
    ("lightTaupe", [179, 139, 109]),
    ("lightThulianPink", [230, 143, 172]),
    ("lightYellow", [255, 255, 224]),
    ("lilac", [200, 162, 200]),
    ("limeColorWheel", [191, 255, 0]),
    ("limeGreen", [50, 205, 50]),
    ("limeWebX11Green", [0, 255, 0]),
    ("limerick", [157, 194, 9]),
    ("lincolnGreen", [25, 89, 5]),
    ("linen", [250, 240, 230]),
    ("lion", [193, 154, 107]),
    ("littleBoyBlue", [108, 160, 220]),
    ("liver", [83, 75, 79]),
    ("lust", [230, 32, 32]),
    ("magenta", [255, 0, 255]),
    ("magentaDye", [202, 31, 123]),
    ("magentaProcess", [255, 0, 144]),
    ("magicMint", [170, 240, 209]),
    ("magnolia", [248, 244, 255]),
    ("mahogany", [192, 64, 0]),
    ("maize", [251, 236, 93]),
    ("majorelleBlue", [96, 80, 220]),
    ("malachite", [11, 218, 81]),
    ("manatee", [151, 154, 170]),
    ("mangoTango", [255, 130, 67]),
    ("mantis", [116, 195, 101]),
    ("mardiGras", [136, 0, 133]),
    ("maroonCrayola", [195, 33, 72]),
    ("maroonHtmlCss", [128, 0, 0]),
    ("maroonX11", [176, 48, 96]),
    ("mauve", [224, 176, 255]),
    ("mauveTaupe", [145, 95, 109]),
    ("mauvelous", [239, 152, 170]),
    ("mayaBlue", [115, 194, 251]),
    ("meatBrown", [229, 183, 59]),
    ("mediumAquamarine", [102, 221, 170]),
    ("mediumBlue", [0, 0, 205]),
    ("mediumCandyAppleRed", [226, 6, 44]),
    ("mediumCarmine", [175, 64, 53]),
    ("mediumChampagne", [243, 229, 171]),
    ("mediumElectricBlue", [3, 80, 150]),
    ("mediumJungleGreen", [28, 53, 45]),
    ("mediumLavenderMagenta", [221, 160, 221]),
    ("mediumOrchid", [186, 85, 211]),
    ("mediumPersianBlue", [0, 103, 165]),
    ("mediumPurple", [147, 112, 219]),
    ("mediumRedViolet", [187, 51, 133]),
    ("mediumRuby", [170, 64, 105]),
    ("mediumSeaGreen", [60, 179, 113]),
    ("mediumSlateBlue", [123, 104, 238]),
    ("mediumSpringBud", [201, 220, 135]),
    ("mediumSpringGreen", [0, 250, 154]),
    ("mediumTaupe", [103, 76, 71]),
    ("mediumTurquoise", [72, 209, 204]),
    ("mediumTuscanRed", [121, 68, 59]),
    ("mediumVermilion", [217, 96, 59]),
    ("mediumVioletRed", [199, 21, 133]),
    ("mellowApricot", [248, 184, 120]),
    ("mellowYellow", [248, 222, 126]),
    ("melon", [253, 188, 180]),
    ("midnightBlue", [25, 25, 112]),
    ("midnightGreenEagleGreen", [0, 73, 83]),
    ("mikadoYellow", [255, 196, 12]),
    ("mint", [62, 180, 137]),
    ("mintCream", [245, 255, 250]),
    ("mintGreen", [152, 255, 152]),
    ("mistyRose", [255, 228, 225]),
    ("moccasin", [250, 235, 215]),
    ("modeBeige", [150, 113, 23]),
    ("moonstoneBlue", [115, 169, 194]),
    ("mordantRed19", [174, 12, 0]),
    ("mossGreen", [173, 223, 173]),
    ("mountainMeadow", [48, 186, 143]),
    ("mountbattenPink", [153, 122, 141]),
    ("msuGreen", [24, 69, 59]),
    ("mulberry", [197, 75, 140]),
    ("mustard", [255, 219, 88]),
    ("myrtle", [33, 66, 30]),
    ("nadeshikoPink", [246, 173, 198]),
    ("napierGreen", [42, 128, 0]),
    ("naplesYellow", [250, 218, 94]),
    ("navajoWhite", [255, 222, 173]),
    ("navyBlue", [0, 0, 128]),
    ("neonCarrot", [255, 163, 67]),
    ("neonFuchsia", [254, 65, 100]),
    ("neonGreen", [57, 255, 20]),
    ("newYorkPink", [215, 131, 127]),
    ("nonPhotoBlue", [164, 221, 237]),
    ("northTexasGreen", [5, 144, 51]),
    ("oceanBoatBlue", [0, 119, 190]),
    ("ochre", [204, 119, 34]),
    ("officeGreen", [0, 128, 0]),
    ("oldGold", [207, 181, 59]),
    ("oldLace", [253, 245, 230]),
    ("oldLavender", [121, 104, 120]),
    ("oldMauve", [103, 49, 71]),
    ("oldRose", [192, 128, 129]),
    ("olive", [128, 128, 0]),
    ("oliveDrab7", [60, 52, 31]),
    ("oliveDrabWebOliveDrab3", [107, 142, 35]),
    ("olivine", [154, 185, 115]),
    ("onyx", [53, 56, 57]),
    ("operaMauve", [183, 132, 167]),
    ("orangeColorWheel", [255, 127, 0]),
    ("orangePeel", [255, 159, 0]),
    ("orangeRed", [255, 69, 0]),
    ("orangeRyb", [251, 153, 2]),
    ("orangeWebColor", [255, 165, 0]),
    ("orchid", [218, 112, 214]),
    ("otterBrown", [101, 67, 33]),
    ("ouCrimsonRed", [153, 0, 0]),
    ("outerSpace", [65, 74, 76]),
    ("outrageousOrange", [255, 110, 74]),
    ("oxfordBlue", [0, 33, 71]),
    ("pakistanGreen", [0, 102, 0]),
    ("palatinateBlue", [39, 59, 226]),
    ("palatinatePurple", [104, 40, 96]),
    ("paleAqua", [188, 212, 230]),
    ("paleBlue", [175, 238, 238]),
    ("paleBrown", [152, 118, 84]),
    ("paleCarmine", [175, 64, 53]),
    ("paleCerulean", [155, 196, 226]),
    ("paleChestnut", [221, 173, 175]),
    ("paleCopper", [218, 138, 103]),
    ("paleCornflowerBlue", [171, 205, 239]),
    ("paleGold", [230, 190, 138]),
    ("paleGoldenrod", [238, 232, 170]),
    ("paleGreen", [152, 251, 152]),
    ("paleLavender", [220, 208, 255]),
    ("paleMagenta", [249, 132, 229]),
    ("palePink", [250, 218, 221]),
    ("palePlum", [221, 160, 221]),
    ("paleRedViolet", [219, 112, 147]),
    ("paleRobinEggBlue", [150, 222, 209]),
    ("paleSilver", [201, 192, 187]),
    ("paleSpringBud", [236, 235, 189]),
    ("paleTaupe", [188, 152, 126]),
    ("paleVioletRed", [219, 112, 147]),
    ("pansyPurple", [120, 24, 74]),
    ("papayaWhip", [255, 239, 213]),
    ("parisGreen", [80, 200, 120]),
    ("pastelBlue", [174, 198, 207]),
    ("pastelBrown", [131, 105, 83]),
    ("pastelGray", [207, 207, 196]),
    ("pastelGreen", [119, 221, 119]),
    ("pastelMagenta", [244, 154, 194]),
    ("pastelOrange", [255, 179, 71]),
    ("pastelPink", [222, 165, 164]),
    ("pastelPurple", [179, 158, 181]),
    ("pastelRed", [255, 105, 97]),
    ("pastelViolet", [203, 153, 201]),
    ("pastelYellow", [253, 253, 150]),
    ("patriarch", [128, 0, 128]),
    ("payneSGrey", [83, 104, 120]),
    ("peach", [255, 229, 180]),
    ("peachCrayola", [255, 203, 164]),
    ("peachOrange", [255, 204, 153]),
    ("peachPuff", [255, 218, 185]),
    ("peachYellow", [250, 223, 173]),
    ("pear", [209, 226, 49]),
    ("pearl", [234, 224, 200]),
    ("pearlAqua", [136, 216, 192]),
    ("pearlyPurple", [183, 104, 162]),
    ("peridot", [230, 226, 0]),
    ("periwinkle", [204, 204, 255]),
    ("persianBlue", [28, 57, 187]),
    ("persianGreen", [0, 166, 147]),
    ("persianIndigo", [50, 18, 122]),
    ("persianOrange", [217, 144, 88]),
    ("persianPink", [247, 127, 190]),
    ("persianPlum", [112, 28, 28]),
    ("persianRed", [204, 51, 51]),
    ("persianRose", [254, 40, 162]),
    ("persimmon", [236, 88, 0]),
    ("peru", [205, 133, 63]),
    ("phlox", [223, 0, 255]),
    ("phthaloBlue", [0, 15, 137]),
    ("phthaloGreen", [18, 53, 36]),
    ("piggyPink", [253, 221, 230]),
    ("pineGreen", [1, 121, 111]),
    ("pink", [255, 192, 203]),
    ("pinkLace", [255, 221, 244]),
    ("pinkOrange", [255, 153, 102]),
    ("pinkPearl", [231, 172, 207]),
    ("pinkSherbet", [247, 143, 167]),
    ("pistachio", [147, 197, 114]),
    ("platinum", [229, 228, 226]),
    ("plumTraditional", [142, 69, 133]),
    ("plumWeb", [221, 160, 221]),
    ("portlandOrange", [255, 90, 54]),
    ("powderBlueWeb", [176, 224, 230]),
    ("princetonOrange", [255, 143, 0]),
    ("prune", [112, 28, 28]),
    ("prussianBlue", [0, 49, 83]),
    ("psychedelicPurple", [223, 0, 255]),
    ("puce", [204, 136, 153]),
    ("pumpkin", [255, 117, 24]),
    ("purpleHeart", [105, 53, 156]),
    ("purpleHtmlCss", [128, 0, 128]),
    ("purpleMountainMajesty", [150, 120, 182]),
    ("purpleMunsell", [159, 0, 197]),
    ("purplePizzazz", [254, 78, 218]),
    ("purpleTaupe", [80, 64, 77]),
    ("purpleX11", [160, 32, 240]),
    ("quartz", [81, 72, 79]),
    ("rackley", [93, 138, 168]),
    ("radicalRed", [255, 53, 94]),
    ("rajah", [251, 171, 96]),
    ("raspberry", [227, 11, 93]),
    ("raspberryGlace", [145, 95, 109]),
    ("raspberryPink", [226, 80, 152]),
    ("raspberryRose", [179, 68, 108]),
    ("rawUmber", [130, 102, 68]),
    ("razzleDazzleRose", [255, 51, 204]),
    ("razzmatazz", [227, 37, 107]),
    ("red", [255, 0, 0]),
    ("redBrown", [165, 42, 42]),
    ("redDevil", [134, 1, 17]),
    ("redMunsell", [242, 0, 60]),
    ("redNcs", [196, 2, 51]),
    ("redOrange", [255, 83, 73]),
    ("redPigment", [237, 28, 36]),
    ("redRyb", [254, 39, 18]),
    ("redViolet", [199, 21, 133]),
    ("redwood", [171, 78, 82]),
    ("regalia", [82, 45, 128]),
    ("resolutionBlue", [0, 35, 135]),
    ("richBlack", [0, 64, 64]),
    ("richBrilliantLavender", [241, 167, 254]),
    ("richCarmine", [215, 0, 64]),
    ("richElectricBlue", [8, 146, 208]),
    ("richLavender", [167, 107, 207]),
    ("richLilac", [182, 102, 210]),
    ("richMaroon", [176, 48, 96]),
    ("rifleGreen", [65, 72, 51]),
    ("robinEggBlue", [0, 204, 204]),
    ("rose", [255, 0, 127]),
    ("roseBonbon", [249, 66, 158]),
    ("roseEbony", [103, 72, 70]),
    ("roseGold", [183, 110, 121]),
    ("roseMadder", [227, 38, 54]),
    ("rosePink", [255, 102, 204]),
    ("roseQuartz", [170, 152, 169]),
    ("roseTaupe", [144, 93, 93]),
    ("roseVale", [171, 78, 82]),
    ("rosewood", [101, 0, 11]),
    ("rossoCorsa", [212, 0, 0]),
    ("rosyBrown", [188, 143, 143]),
    ("royalAzure", [0, 56, 168]),
    ("royalBlueTraditional", [0, 35, 102]),
    ("royalBlueWeb", [65, 105, 225]),
    ("royalFuchsia", [202, 44, 146]),
    ("royalPurple", [120, 81, 169]),
    ("royalYellow", [250, 218, 94]),
    ("rubineRed", [209, 0, 86]),
    ("ruby", [224, 17, 95]),
    ("rubyRed", [155, 17, 30]),
    ("ruddy", [255, 0, 40]),
    ("ruddyBrown", [187, 101, 40]),
    ("ruddyPink", [225, 142, 150]),
    ("rufous", [168, 28, 7]),
    ("russet", [128, 70, 27]),
    ("rust", [183, 65, 14]),
    ("rustyRed", [218, 44, 67]),
    ("sacramentoStateGreen", [0, 86, 63]),
    ("saddleBrown", [139, 69, 19]),
    ("safetyOrangeBlazeOrange", [255, 103, 0]),
    ("saffron", [244, 196, 48]),
    ("salmon", [255, 140, 105]),
    ("salmonPink", [255, 145, 164]),
    ("sand", [194, 178, 128]),
    ("sandDune", [150, 113, 23]),
    ("sandstorm", [236, 213, 64]),
    ("sandyBrown", [244, 164, 96]),
    ("sandyTaupe", [150, 113, 23]),
    ("sangria", [146, 0, 10]),
    ("sapGreen", [80, 125, 42]),
    ("sapphire", [15, 82, 186]),
    ("sapphireBlue", [0, 103, 165]),
    ("satinSheenGold", [203, 161, 53]),
    ("scarlet", [255, 36, 0]),
    ("scarletCrayola", [253, 14, 53]),
    ("schoolBusYellow", [255, 216, 0]),
    ("screaminGreen", [118, 255, 122]),
    ("seaBlue", [0, 105, 148]),
    ("seaGreen", [46, 139, 87]),
    ("sealBrown", [50, 20, 20]),
    ("seashell", [255, 245, 238]),
    ("selectiveYellow", [255, 186, 0]),
    ("sepia", [112, 66, 20]),
    ("shadow", [138, 121, 93]),
    ("shamrockGreen", [0, 158, 96]),
    ("shockingPink", [252, 15, 192]),
    ("shockingPinkCrayola", [255, 111, 255]),
    ("sienna", [136, 45, 23]),
    ("silver", [192, 192, 192]),
    ("sinopia", [203, 65, 11]),
    ("skobeloff", [0, 116, 116]),
    ("skyBlue", [135, 206, 235]),
    ("skyMagenta", [207, 113, 175]),
    ("slateBlue", [106, 90, 205]),
    ("slateGray", [112, 128, 144]),
    ("smaltDarkPowderBlue", [0, 51, 153]),
    ("smokeyTopaz", [147, 61, 65]),
    ("smokyBlack", [16, 12, 8]),
    ("snow", [255, 250, 250]),
    ("spiroDiscoBall", [15, 192, 252]),
    ("springBud", [167, 252, 0]),
    ("springGreen", [0, 255, 127]),
    ("stPatrickSBlue", [35, 41, 122]),
    ("steelBlue", [70, 130, 180]),
    ("stilDeGrainYellow", [250, 218, 94]),
    ("stizza", [153, 0, 0]),
    ("stormcloud", [79, 102, 106]),
    ("straw", [228, 217, 111]),
    ("sunglow", [255, 204, 51]),
    ("sunset", [250, 214, 165]),
    ("tan", [210, 180, 140]),
    ("tangelo", [249, 77, 0]),
    ("tangerine", [242, 133, 0]),
    ("tangerineYellow", [255, 204, 0]),
    ("tangoPink", [228, 113, 122]),
    ("taupe", [72, 60, 50]),
    ("taupeGray", [139, 133, 137]),
    ("teaGreen", [208, 240, 192]),
    ("teaRoseOrange", [248, 131, 121]),
    ("teaRoseRose", [244, 194, 194]),
    ("teal", [0, 128, 128]),
    ("tealBlue", [54, 117, 136]),
    ("tealGreen", [0, 130, 127]),
    ("telemagenta", [207, 52, 118]),
    ("tennTawny", [205, 87, 0]),
    ("terraCotta", [226, 114, 91]),
    ("thistle", [216, 191, 216]),
    ("thulianPink", [222, 111, 161]),
    ("tickleMePink", [252, 137, 172]),
    ("tiffanyBlue", [10, 186, 181]),
    ("tigerSEye", [224, 141, 60]),
    ("timberwolf", [219, 215, 210]),
    ("titaniumYellow", [238, 230, 0]),
    ("tomato", [255, 99, 71]),
    ("toolbox", [116, 108, 192]),
    ("topaz", [255, 200, 124]),
    ("tractorRed", [253, 14, 53]),
    ("trolleyGrey", [128, 128, 128]),
    ("tropicalRainForest", [0, 117, 94]),
    ("trueBlue", [0, 115, 207]),
    ("tuftsBlue", [65, 125, 193]),
    ("tumbleweed", [222, 170, 136]),
    ("turkishRose", [181, 114, 129]),
    ("turquoise", [48, 213, 200]),
    ("turquoiseBlue", [0, 255, 239]),
    ("turquoiseGreen", [160, 214, 180]),
    ("tuscanRed", [124, 72, 72]),
    ("twilightLavender", [138, 73, 107]),
    ("tyrianPurple", [102, 2, 60]),
    ("uaBlue", [0, 51, 170]),
    ("uaRed", [217, 0, 76]),
    ("ube", [136, 120, 195]),
    ("uclaBlue", [83, 104, 149]),
    ("uclaGold", [255, 179, 0]),
    ("ufoGreen", [60, 208, 112]),
    ("ultraPink", [255, 111, 255]),
    ("ultramarine", [18, 10, 143]),
    ("ultramarineBlue", [65, 102, 245]),
    ("umber", [99, 81, 71]),
    ("unbleachedSilk", [255, 221, 202]),
    ("unitedNationsBlue", [91, 146, 229]),
    ("universityOfCaliforniaGold", [183, 135, 39]),
    ("unmellowYellow", [255, 255, 102]),
    ("upForestGreen", [1, 68, 33]),
    ("upMaroon", [123, 17, 19]),
    ("upsdellRed", [174, 32, 41]),
    ("urobilin", [225, 173, 33]),
    ("usafaBlue", [0, 79, 152]),
    ("uscCardinal", [153, 0, 0]),
    ("uscGold", [255, 204, 0]),
    ("utahCrimson", [211, 0, 63]),
    ("vanilla", [243, 229, 171]),
    ("vegasGold", [197, 179, 88]),
    ("venetianRed", [200, 8, 21]),
    ("verdigris", [67, 179, 174]),
    ("vermilionCinnabar", [227, 66, 52]),
    ("vermilionPlochere", [217, 96, 59]),
    ("veronica", [160, 32, 240]),
    ("violet", [143, 0, 255]),
    ("violetBlue", [50, 74, 178]),
    ("violetColorWheel", [127, 0, 255]),
    ("violetRyb", [134, 1, 175]),
    ("violetWeb", [238, 130, 238]),
    ("viridian", [64, 130, 109]),
    ("vividAuburn", [146, 39, 36]),
    ("vividBurgundy", [159, 29, 53]),
    ("vividCerise", [218, 29, 129]),
    ("vividTangerine", [255, 160, 137]),
    ("vividViolet", [159, 0, 255]),
    ("warmBlack", [0, 66, 66]),
    ("waterspout", [164, 244, 249]),
    ("wenge", [100, 84, 82]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whiteSmoke", [245, 245, 245]),
    ("wildBlueYonder", [162, 173, 208]),
    ("wildStrawberry", [255, 67, 164]),
    ("wildWatermelon", [252, 108, 133]),
    ("wine", [114, 47, 55]),
    ("wineDregs", [103, 49, 71]),
    ("wisteria", [201, 160, 220]),
    ("woodBrown", [193, 154, 107]),
    ("xanadu", [115, 134, 120]),
    ("yaleBlue", [15, 77, 146]),
    ("yellow", [255, 255, 0]),
    ("yellowGreen", [154, 205, 50]),
    ("yellowMunsell", [239, 204, 0]),
    ("yellowNcs", [255, 211, 0]),
    ("yellowOrange", [255, 174, 66]),
    ("yellowProcess", [255, 239, 0]),
    ("yellowRyb", [254, 254, 51]),
    ("zaffre", [0, 20, 168]),
    ("zinnwalditeBrown", [44, 22, 8]),
];
